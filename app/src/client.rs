//! Cliente HTTP da consulta de CNPJ e da submissão dos dados editados.
//!
//! | Método | Caminho                          | Operação              |
//! |--------|----------------------------------|-----------------------|
//! | GET    | `{registry_url}/cnpj/v1/{cnpj}`  | [`ApiClient::buscar_cnpj`] |
//! | POST   | `{backend_url}/api/submit`       | [`ApiClient::submeter`]    |
//!
//! Sem retry, sem cache e sem timeout próprio: vale o comportamento padrão do
//! transporte. Qualquer status fora da faixa 2xx é tratado como falha.

use crate::cnpj::Cnpj;
use crate::config::ClientConfig;
use crate::error::{ConfigError, ConsultaError};
use crate::models::Empresa;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("consulta-cnpj/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::ClienteHttp(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Consulta o registro da empresa.
    ///
    /// Chama `GET {registry_url}/cnpj/v1/{cnpj}`.
    pub async fn buscar_cnpj(&self, cnpj: &Cnpj) -> Result<Empresa, ConsultaError> {
        let endpoint = format!("GET /cnpj/v1/{cnpj}");
        let url = self
            .config
            .url_consulta(cnpj.as_str())
            .map_err(|e| ConsultaError::Consulta {
                status: None,
                detalhe: e.to_string(),
            })?;

        tracing::debug!(%url, "consultando CNPJ");
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(%endpoint, error = %e, "falha de transporte na consulta");
            ConsultaError::Consulta {
                status: None,
                detalhe: e.to_string(),
            }
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%endpoint, status, "consulta retornou status de erro");
            return Err(ConsultaError::Consulta {
                status: Some(status),
                detalhe: body,
            });
        }

        resp.json::<Empresa>().await.map_err(|e| {
            tracing::warn!(%endpoint, error = %e, "resposta da consulta malformada");
            ConsultaError::Resposta {
                endpoint,
                detalhe: e.to_string(),
            }
        })
    }

    /// Envia o registro completo (com as edições locais) ao backend.
    ///
    /// Chama `POST {backend_url}/api/submit` com corpo JSON. O corpo da
    /// resposta é ignorado; só a classe do status importa.
    pub async fn submeter(&self, empresa: &Empresa) -> Result<(), ConsultaError> {
        let endpoint = "POST /api/submit";
        let url = self
            .config
            .url_submissao()
            .map_err(|e| ConsultaError::Submissao {
                status: None,
                detalhe: e.to_string(),
            })?;

        tracing::debug!(%url, cnpj = %empresa.cnpj, "submetendo dados");
        let resp = self.http.post(url).json(empresa).send().await.map_err(|e| {
            tracing::warn!(endpoint, error = %e, "falha de transporte na submissão");
            ConsultaError::Submissao {
                status: None,
                detalhe: e.to_string(),
            }
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(endpoint, status, "submissão retornou status de erro");
            return Err(ConsultaError::Submissao {
                status: Some(status),
                detalhe: body,
            });
        }

        Ok(())
    }
}
