//! Registry file fixtures used across harnesses.
//!
//! Each fixture is `;`-delimited text in the shape of the published
//! `Relatorio_cadop.csv`, including columns the loader is expected to drop
//! (`Regiao_de_Comercializacao`, `Fax`, ...).

use std::io::Write;
use tempfile::NamedTempFile;

/// Raw header row, in source order, with extra columns and padded names.
pub const REGISTRY_HEADER: &str = "Registro_ANS ; CNPJ;Razao_Social;Nome_Fantasia;Modalidade;Logradouro;Numero;Complemento;Bairro;Cidade;UF;CEP;DDD;Telefone;Fax;Endereco_eletronico;Representante;Cargo_Representante;Regiao_de_Comercializacao;Data_Registro_ANS";

/// Three operators; the second one is the only "saude" match.
pub const CORPUS_SCENARIO: &[&str] = &[
    "00123;01234567000189;ALFA PLANOS LTDA;ALFA;Medicina de Grupo;Rua das Flores;100;Sala 2;Centro;Recife;PE;05010000;081;034560000;;contato@alfa.com.br;Maria Souza;Diretora;4;02/01/2001",
    "004567;11222333000144;ACME SAUDE;;Cooperativa Medica;Av. Brasil;2000;;Jardins;Sao Paulo;SP;01430001;011;31234567;;;Joao Lima;Presidente;1;15-06-1999",
    "009999;99888777000166;BETA ODONTO S.A.;BETA;Odontologia de Grupo;Rua Chile;7;Bloco B;Savassi;Belo Horizonte;MG;30140000;031;32221111;32221112;sac@beta.com.br;Ana Reis;Diretora;2;31/12/2010",
];

/// Two rows sharing a registry id; the first must win on lookup.
pub const CORPUS_DUPLICATES: &[&str] = &[
    "00777;00000000000191;PRIMEIRA OPERADORA;;Autogestao;Rua Um;1;;Centro;Natal;RN;59000000;084;30000000;;;;;;01/01/2000",
    "00777;00000000000272;SEGUNDA OPERADORA;;Autogestao;Rua Dois;2;;Centro;Natal;RN;59000001;084;30000001;;;;;;01/01/2000",
];

/// Render a registry file body from data rows.
pub fn registry_csv(rows: &[&str]) -> String {
    let mut out = String::from(REGISTRY_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Write a registry file to a fresh temp file.
pub fn write_registry(rows: &[&str]) -> NamedTempFile {
    write_raw(&registry_csv(rows))
}

/// Write arbitrary content to a fresh temp file.
pub fn write_raw(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

/// Generate `n` synthetic rows; every tenth one is an "odonto" operator.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let category = if i % 10 == 0 { "Odontologia de Grupo" } else { "Medicina de Grupo" };
            format!(
                "{i:06};{cnpj:014};OPERADORA {i};;{category};Rua {i};{i};;Centro;Cidade {city};SP;{cep:08};011;{i:08};;;;;;01/01/2000",
                cnpj = i * 7,
                city = i % 50,
                cep = i * 3,
            )
        })
        .collect()
}
