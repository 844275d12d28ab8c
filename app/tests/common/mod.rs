#![allow(dead_code)]

use consulta_cnpj::{ApiClient, ClientConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const CNPJ: &str = "11222333000181";

/// Cliente com consulta e submissão apontando para o mesmo servidor mock.
pub fn test_client(mock_server: &MockServer) -> ApiClient {
    let base = mock_server.uri();
    let config = ClientConfig::new(&format!("{base}/api"), &base).unwrap();
    ApiClient::new(config).unwrap()
}

/// Resposta da BrasilAPI reduzida, com alguns campos que o modelo não cobre.
/// O último sócio vem sem as chaves opcionais e com percentual inteiro.
pub fn resposta_brasilapi() -> Value {
    json!({
        "cnpj": CNPJ,
        "razao_social": "PADARIA PAO QUENTE LTDA",
        "nome_fantasia": "PAO QUENTE",
        "data_inicio_atividade": "1998-07-01",
        "descricao_situacao_cadastral": "ATIVA",
        "cnae_fiscal_descricao": "Padaria e confeitaria com predominância de revenda",
        "logradouro": "AVENIDA BRASIL",
        "numero": "1500",
        "bairro": "JARDIM AMERICA",
        "municipio": "RIBEIRAO PRETO",
        "uf": "SP",
        "ddd_telefone_1": "1639410000",
        "capital_social": 50000,
        "cnaes_secundarios": [{ "codigo": 4721104, "descricao": "Comércio varejista de doces" }],
        "qsa": [
            {
                "identificador_de_socio": 2,
                "nome_socio": "ANA PEREIRA",
                "cnpj_cpf_do_socio": "***111222**",
                "codigo_qualificacao_socio": 49,
                "percentual_capital_social": 70.0,
                "data_entrada_sociedade": "1998-07-01",
                "cpf_representante_legal": null,
                "nome_representante_legal": null,
                "codigo_qualificacao_representante_legal": null
            },
            {
                "identificador_de_socio": 2,
                "nome_socio": "BRUNO PEREIRA",
                "cnpj_cpf_do_socio": "***333444**",
                "codigo_qualificacao_socio": 22,
                "percentual_capital_social": 30.0,
                "data_entrada_sociedade": "2003-02-15",
                "cpf_representante_legal": "***555666**",
                "nome_representante_legal": "CARLA PEREIRA",
                "codigo_qualificacao_representante_legal": 9
            },
            {
                "identificador_de_socio": 2,
                "nome_socio": "DIEGO PEREIRA",
                "cnpj_cpf_do_socio": "***777888**",
                "codigo_qualificacao_socio": 49,
                "percentual_capital_social": 0,
                "data_entrada_sociedade": "2020-09-01"
            }
        ]
    })
}
