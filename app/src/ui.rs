use colored::*;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::consulta::ModoEdicao;
use crate::models::{CampoEditavel, Empresa};
use crate::notificacao::{Notificacao, TipoNotificacao};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn init(quiet: bool, verbose: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue(), message);
    }
}

pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), message.green());
    }
}

pub fn print_warning(message: &str) {
    if !is_quiet() {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_header(message: &str) {
    if !is_quiet() {
        println!("\n{}", message.bold().cyan());
        println!("{}", "─".repeat(message.chars().count()).cyan());
    }
}

pub fn print_verbose(message: &str) {
    if is_verbose() && !is_quiet() {
        println!("  {}", message.dimmed());
    }
}

pub fn print_separator() {
    if !is_quiet() {
        println!("{}", "=".repeat(60).dimmed());
    }
}

/// Equivalente ao toast: sucesso em verde, erro em vermelho.
pub fn print_notificacao(notificacao: &Notificacao) {
    match notificacao.tipo {
        TipoNotificacao::Sucesso => print_success(&notificacao.mensagem),
        TipoNotificacao::Erro => print_error(&notificacao.mensagem),
    }
}

fn print_campo(rotulo: &str, valor: &str, editavel: bool) {
    let marcador = if editavel { "✎".yellow() } else { " ".normal() };
    println!("{} {}: {}", marcador, rotulo.bold(), valor);
}

/// Mostra o registro como na tela de consulta. No modo de edição os campos
/// editáveis aparecem marcados, junto com a chave usada no comando `campo`.
pub fn print_empresa(empresa: &Empresa, modo: ModoEdicao) {
    let editavel = modo.is_editavel();

    println!("\n{}", "Informações da Empresa".bold().cyan());
    println!("  {} {}", "CNPJ:".bold(), empresa.cnpj_formatado());
    for campo in CampoEditavel::TODOS {
        let rotulo = if editavel {
            format!("{} [{}]", campo.rotulo(), campo.chave())
        } else {
            campo.rotulo().to_string()
        };
        print_campo(&rotulo, empresa.campo(campo), editavel);
    }
    print_campo("Endereço Completo", &empresa.endereco_completo(), false);

    println!("\n{}", "Quadro Societário".bold().cyan());
    if empresa.qsa.is_empty() {
        println!("  {}", "(sem sócios informados)".dimmed());
    }
    for socio in &empresa.qsa {
        println!("  {} {}", "•".cyan(), socio.nome_socio.bold());
        println!("    CPF/CNPJ: {}", socio.cnpj_cpf_do_socio);
        println!("    Qualificação: {}", socio.codigo_qualificacao_socio);
        let percentual = socio.percentual().map(|p| p.to_string()).unwrap_or_default();
        println!("    Percentual do Capital Social: {}", percentual);
        if let Some(nome) = socio.nome_representante() {
            println!("    Representante Legal: {}", nome);
        }
    }

    let modo_txt = if editavel { "edição" } else { "leitura" };
    println!("\n  {}", format!("Modo: {modo_txt}").dimmed());
}

/// Lê um comando de `entrada` (na sessão, o stdin do tokio). Retorna `None`
/// no fim da entrada.
pub async fn ler_comando<R>(entrada: &mut R, prompt: &str) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{} ", prompt.bold());
    io::stdout().flush()?;

    let mut input = String::new();
    let lidos = entrada.read_line(&mut input).await?;
    if lidos == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ler_comando_remove_quebra_de_linha_e_para_no_fim() {
        let mut entrada: &[u8] = b"cnpj 11.222.333/0001-81\r\nconsultar\n";

        let primeiro = ler_comando(&mut entrada, ">").await.unwrap();
        assert_eq!(primeiro.as_deref(), Some("cnpj 11.222.333/0001-81"));
        let segundo = ler_comando(&mut entrada, ">").await.unwrap();
        assert_eq!(segundo.as_deref(), Some("consultar"));
        assert_eq!(ler_comando(&mut entrada, ">").await.unwrap(), None);
    }

    #[tokio::test]
    async fn ler_comando_aceita_ultima_linha_sem_quebra() {
        let mut entrada: &[u8] = b"sair";
        assert_eq!(ler_comando(&mut entrada, ">").await.unwrap().as_deref(), Some("sair"));
    }
}
