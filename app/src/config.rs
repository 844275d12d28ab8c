//! Endereços dos serviços usados pela consulta.
//!
//! O registro de CNPJ é a BrasilAPI; o backend é quem recebe a submissão em
//! `/api/submit`. Ambos podem ser sobrescritos pela linha de comando ou pelas
//! variáveis `CONSULTA_CNPJ_REGISTRY_URL` e `CONSULTA_CNPJ_BACKEND_URL`.

use url::Url;

use crate::error::ConfigError;

pub const REGISTRY_URL_PADRAO: &str = "https://brasilapi.com.br/api";
pub const BACKEND_URL_PADRAO: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base da API de consulta; o caminho `cnpj/v1/{cnpj}` é anexado a ela.
    pub registry_url: Url,
    /// Base do backend; o caminho `api/submit` é anexado a ela.
    pub backend_url: Url,
}

impl ClientConfig {
    pub fn new(registry_url: &str, backend_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            registry_url: parse_base("registry_url", registry_url)?,
            backend_url: parse_base("backend_url", backend_url)?,
        })
    }

    pub fn url_consulta(&self, cnpj: &str) -> Result<Url, ConfigError> {
        join(&self.registry_url, &format!("cnpj/v1/{cnpj}"))
    }

    pub fn url_submissao(&self) -> Result<Url, ConfigError> {
        join(&self.backend_url, "api/submit")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(REGISTRY_URL_PADRAO, BACKEND_URL_PADRAO).expect("URLs padrão são válidas")
    }
}

/// Garante a barra final para que `join` anexe em vez de substituir o último segmento.
fn parse_base(nome: &str, raw: &str) -> Result<Url, ConfigError> {
    let com_barra = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&com_barra)
        .map_err(|e| ConfigError::UrlInvalida(nome.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::UrlInvalida(nome.to_string(), "URL não pode ser base".into()));
    }
    Ok(url)
}

fn join(base: &Url, caminho: &str) -> Result<Url, ConfigError> {
    base.join(caminho)
        .map_err(|e| ConfigError::UrlInvalida(base.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padrao_aponta_para_brasilapi() {
        let cfg = ClientConfig::default();
        assert_eq!(
            cfg.url_consulta("11222333000181").unwrap().as_str(),
            "https://brasilapi.com.br/api/cnpj/v1/11222333000181"
        );
        assert_eq!(cfg.url_submissao().unwrap().as_str(), "http://127.0.0.1:3000/api/submit");
    }

    #[test]
    fn aceita_base_com_ou_sem_barra_final() {
        let sem = ClientConfig::new("http://localhost:8080/api", "http://localhost:3000")
            .unwrap();
        let com = ClientConfig::new("http://localhost:8080/api/", "http://localhost:3000/")
            .unwrap();
        assert_eq!(sem, com);
        assert_eq!(
            sem.url_consulta("00000000000191").unwrap().as_str(),
            "http://localhost:8080/api/cnpj/v1/00000000000191"
        );
    }

    #[test]
    fn rejeita_url_invalida() {
        let erro = ClientConfig::new("não é url", "http://localhost:3000").unwrap_err();
        assert!(matches!(erro, ConfigError::UrlInvalida(ref nome, _) if nome == "registry_url"));
        assert!(ClientConfig::new("http://localhost", "mailto:x@y").is_err());
    }
}
