use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use consulta_cnpj::config::{BACKEND_URL_PADRAO, REGISTRY_URL_PADRAO};
use consulta_cnpj::sessao::{self, Comando, Saida};
use consulta_cnpj::{ui, ApiClient, ClientConfig, ConsultaState};

#[derive(Parser)]
#[command(name = "consulta-cnpj")]
#[command(about = "Consulta de CNPJ com edição e submissão dos dados", long_about = None)]
struct Cli {
    /// Modo silencioso (menos saída)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Modo verboso (mais detalhes)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// URL base da API de consulta de CNPJ
    #[arg(long, global = true, env = "CONSULTA_CNPJ_REGISTRY_URL", default_value = REGISTRY_URL_PADRAO)]
    registry_url: String,

    /// URL base do backend que recebe a submissão em /api/submit
    #[arg(long, global = true, env = "CONSULTA_CNPJ_BACKEND_URL", default_value = BACKEND_URL_PADRAO)]
    backend_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consulta um CNPJ e mostra os dados da empresa
    Consultar {
        /// CNPJ com ou sem máscara (ex: 11.222.333/0001-81)
        cnpj: String,
        /// Imprime o registro em JSON
        #[arg(long)]
        json: bool,
    },
    /// Sessão interativa: consultar, editar e submeter
    Sessao,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ui::init(cli.quiet, cli.verbose);

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::new(&cli.registry_url, &cli.backend_url)
        .context("Configuração de endpoints inválida")?;
    let client = ApiClient::new(config).context("Falha ao criar cliente HTTP")?;
    ui::print_verbose(&format!("API de consulta: {}", client.config().registry_url));
    ui::print_verbose(&format!("Backend: {}", client.config().backend_url));

    match cli.command {
        Commands::Consultar { cnpj, json } => {
            consultar(&client, &cnpj, json).await?;
        }
        Commands::Sessao => {
            executar_sessao(&client).await?;
        }
    }

    Ok(())
}

async fn consultar(client: &ApiClient, cnpj: &str, json: bool) -> Result<()> {
    let mut estado = ConsultaState::new();
    estado.alterar_cnpj(cnpj);

    let notificacao = estado.buscar(client).await;
    if let Some(notificacao) = &notificacao {
        if notificacao.is_erro() {
            anyhow::bail!("{}", notificacao.mensagem);
        }
    }

    if let Some(empresa) = estado.empresa() {
        if json {
            let texto = serde_json::to_string_pretty(empresa)
                .context("Falha ao serializar o registro")?;
            println!("{texto}");
        } else {
            if let Some(notificacao) = &notificacao {
                ui::print_notificacao(notificacao);
            }
            ui::print_empresa(empresa, estado.modo());
        }
    }
    Ok(())
}

async fn executar_sessao(client: &ApiClient) -> Result<()> {
    ui::print_header("🔎 Consulta de CNPJ");
    ui::print_info("Digite 'ajuda' para ver os comandos.");
    ui::print_separator();

    let mut estado = ConsultaState::new();
    let mut entrada = BufReader::new(tokio::io::stdin());

    while let Some(linha) = ui::ler_comando(&mut entrada, ">")
        .await
        .context("Falha ao ler a entrada")?
    {
        let comando = match linha.parse::<Comando>() {
            Ok(comando) => comando,
            Err(sessao::ComandoInvalido::Vazio) => continue,
            Err(e) => {
                ui::print_warning(&e.to_string());
                continue;
            }
        };

        match sessao::executar(&mut estado, client, comando).await {
            Saida::Notificacao(notificacao) => {
                ui::print_notificacao(&notificacao);
                if !notificacao.is_erro() {
                    if let Some(empresa) = estado.empresa() {
                        ui::print_empresa(empresa, estado.modo());
                    }
                }
            }
            Saida::Aviso(aviso) => ui::print_warning(&aviso),
            Saida::Mostrar => {
                if let Some(empresa) = estado.empresa() {
                    ui::print_empresa(empresa, estado.modo());
                }
            }
            Saida::Ajuda => println!("{}", sessao::AJUDA),
            Saida::Nada => {}
            Saida::Sair => break,
        }
    }

    ui::print_verbose("Sessão encerrada.");
    Ok(())
}
