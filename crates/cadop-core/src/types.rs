//! Core types for cadop-core.
//!
//! This module defines the data shared by the loader and the query layer: the
//! normalised [`Record`], the fixed [`Field`] list it is projected onto, and
//! the immutable [`Table`] built once at startup.

use chrono::NaiveDate;
use serde::Serialize;

/// One operator from the registry after normalisation.
///
/// Every field is optional. A missing or blank source value is `None` and
/// serialises as an explicit JSON `null`. Identifier-like fields are opaque
/// strings so leading zeros survive (`"00123"` stays `"00123"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub registry_id: Option<String>,
    pub tax_id: Option<String>,
    pub legal_name: Option<String>,
    pub trade_name: Option<String>,
    pub category: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub area_code: Option<String>,
    pub phone: Option<String>,
    pub electronic_address: Option<String>,
    /// Parsed day-first from the raw `Data_Registro_ANS` column when present.
    /// Kept for callers inside the process only; never serialised or searched.
    #[serde(skip)]
    pub registration_date: Option<NaiveDate>,
}

impl Record {
    /// Value of a retained field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Overwrite a retained field.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// String projection of every retained field, in [`Field::ALL`] order.
    ///
    /// Nulls project to the empty string so they can never match a search
    /// term of two or more characters.
    pub fn search_fields(&self) -> impl Iterator<Item = &str> + '_ {
        Field::ALL
            .iter()
            .map(move |&field| self.get(field).unwrap_or(""))
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::RegistryId => &self.registry_id,
            Field::TaxId => &self.tax_id,
            Field::LegalName => &self.legal_name,
            Field::TradeName => &self.trade_name,
            Field::Category => &self.category,
            Field::Street => &self.street,
            Field::Number => &self.number,
            Field::Complement => &self.complement,
            Field::District => &self.district,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::PostalCode => &self.postal_code,
            Field::AreaCode => &self.area_code,
            Field::Phone => &self.phone,
            Field::ElectronicAddress => &self.electronic_address,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::RegistryId => &mut self.registry_id,
            Field::TaxId => &mut self.tax_id,
            Field::LegalName => &mut self.legal_name,
            Field::TradeName => &mut self.trade_name,
            Field::Category => &mut self.category,
            Field::Street => &mut self.street,
            Field::Number => &mut self.number,
            Field::Complement => &mut self.complement,
            Field::District => &mut self.district,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::PostalCode => &mut self.postal_code,
            Field::AreaCode => &mut self.area_code,
            Field::Phone => &mut self.phone,
            Field::ElectronicAddress => &mut self.electronic_address,
        }
    }
}

/// The fixed set of columns retained from the registry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RegistryId,
    TaxId,
    LegalName,
    TradeName,
    Category,
    Street,
    Number,
    Complement,
    District,
    City,
    State,
    PostalCode,
    AreaCode,
    Phone,
    ElectronicAddress,
}

impl Field {
    /// Every retained field, in output order.
    pub const ALL: [Field; 15] = [
        Field::RegistryId,
        Field::TaxId,
        Field::LegalName,
        Field::TradeName,
        Field::Category,
        Field::Street,
        Field::Number,
        Field::Complement,
        Field::District,
        Field::City,
        Field::State,
        Field::PostalCode,
        Field::AreaCode,
        Field::Phone,
        Field::ElectronicAddress,
    ];

    /// Column header this field is read from in the source file.
    pub fn header(self) -> &'static str {
        match self {
            Field::RegistryId => "Registro_ANS",
            Field::TaxId => "CNPJ",
            Field::LegalName => "Razao_Social",
            Field::TradeName => "Nome_Fantasia",
            Field::Category => "Modalidade",
            Field::Street => "Logradouro",
            Field::Number => "Numero",
            Field::Complement => "Complemento",
            Field::District => "Bairro",
            Field::City => "Cidade",
            Field::State => "UF",
            Field::PostalCode => "CEP",
            Field::AreaCode => "DDD",
            Field::Phone => "Telefone",
            Field::ElectronicAddress => "Endereco_eletronico",
        }
    }

    /// Identifier-like fields are forced to trimmed strings at load time.
    pub fn is_identifier(self) -> bool {
        matches!(
            self,
            Field::RegistryId | Field::TaxId | Field::PostalCode | Field::AreaCode | Field::Phone
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::RegistryId => "registry_id",
            Field::TaxId => "tax_id",
            Field::LegalName => "legal_name",
            Field::TradeName => "trade_name",
            Field::Category => "category",
            Field::Street => "street",
            Field::Number => "number",
            Field::Complement => "complement",
            Field::District => "district",
            Field::City => "city",
            Field::State => "state",
            Field::PostalCode => "postal_code",
            Field::AreaCode => "area_code",
            Field::Phone => "phone",
            Field::ElectronicAddress => "electronic_address",
        };
        write!(f, "{name}")
    }
}

/// Ordered, immutable collection of [`Record`]s produced by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The failed-load / empty-source table.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
