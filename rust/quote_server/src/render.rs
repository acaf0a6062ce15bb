// src/render.rs

use quote_service::formatter::{format_currency, format_market_cap, format_percentage};
use quote_service::QuoteRecord;
use std::fmt::{self, Write};

const TITLE: &str = "Cotações de Ações - B3";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.10.0/font/bootstrap-icons.css";

pub struct IndexPage<'a> {
    pub quotes: Vec<&'a QuoteRecord>,
    pub invalid: Vec<&'a QuoteRecord>,
    pub ativos: &'a str,
    pub search_query: &'a str,
    pub error_message: &'a str,
    pub total: usize,
    pub updated_at: &'a str,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn write_head(out: &mut String, title: &str) -> fmt::Result {
    write!(
        out,
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<link rel="stylesheet" href="{icons}">
</head>
<body class="bg-light">
"#,
        title = escape_html(title),
        css = BOOTSTRAP_CSS,
        icons = BOOTSTRAP_ICONS,
    )
}

fn write_quote_card(out: &mut String, quote: &QuoteRecord) -> fmt::Result {
    let trend = if quote.change_percent >= 0.0 { "text-success" } else { "text-danger" };
    write!(
        out,
        r#"<div class="col-md-4 mb-3">
<div class="card shadow-sm" id="card-{symbol}">
<div class="card-body">
<h5 class="card-title">{symbol} <small class="text-muted">{short_name}</small></h5>
<h6 class="card-subtitle mb-2 text-muted">{long_name}</h6>
<p class="fs-4 mb-1">{price}</p>
<p class="{trend} mb-1">{change}</p>
<p class="mb-0 small">Fechamento anterior: {previous}</p>
<p class="mb-0 small">Valor de mercado: {market_cap}</p>
</div>
</div>
</div>
"#,
        symbol = escape_html(&quote.symbol),
        short_name = escape_html(&quote.short_name),
        long_name = escape_html(&quote.long_name),
        price = escape_html(&format_currency(quote.price, &quote.currency)),
        trend = trend,
        change = format_percentage(quote.change_percent),
        previous = escape_html(&format_currency(quote.previous_close, &quote.currency)),
        market_cap = format_market_cap(quote.market_cap),
    )
}

pub fn index_page(page: &IndexPage) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_head(&mut out, TITLE)?;

    write!(
        out,
        r#"<div class="container py-4">
<h1 class="mb-3"><i class="bi bi-graph-up"></i> {title}</h1>
<div class="mb-3">
<span class="badge bg-info">{total} ativos</span>
<span class="badge bg-secondary">Atualizado em {updated_at}</span>
</div>
<form class="row g-2 mb-2" method="get" action="/">
<div class="col-md-8"><input class="form-control" id="busca-input" name="busca" placeholder="Buscar ativo (ex: PETR4)" value="{search_query}"></div>
<div class="col-md-4"><button class="btn btn-primary w-100" type="submit">Buscar</button></div>
</form>
<form class="row g-2 mb-4" method="get" action="/">
<div class="col-md-8"><input class="form-control" id="ativos-input" name="ativos" placeholder="PETR4,VALE3,BBAS3" value="{ativos}"></div>
<div class="col-md-4"><button class="btn btn-outline-primary w-100" type="submit">Exibir ativos</button></div>
</form>
"#,
        title = escape_html(TITLE),
        total = page.total,
        updated_at = escape_html(page.updated_at),
        search_query = escape_html(page.search_query),
        ativos = escape_html(page.ativos),
    )?;

    if !page.error_message.is_empty() {
        writeln!(
            out,
            "<div class=\"alert alert-danger\" role=\"alert\">{}</div>",
            escape_html(page.error_message)
        )?;
    }

    out.push_str("<div class=\"row\" id=\"cotacoes-container\">\n");
    for quote in &page.quotes {
        write_quote_card(&mut out, quote)?;
    }
    out.push_str("</div>\n");

    if page.quotes.is_empty() && page.invalid.is_empty() && page.error_message.is_empty() {
        out.push_str("<p class=\"text-muted\">Nenhum ativo selecionado.</p>\n");
    }

    if !page.invalid.is_empty() {
        out.push_str("<div class=\"alert alert-warning\" id=\"ativos-invalidos\">\n<h5>Ativos não encontrados</h5>\n<ul class=\"mb-0\">\n");
        for quote in &page.invalid {
            writeln!(
                out,
                "<li><strong>{}</strong>: {}</li>",
                escape_html(&quote.symbol),
                escape_html(quote.error.as_deref().unwrap_or_default())
            )?;
        }
        out.push_str("</ul>\n</div>\n");
    }

    out.push_str("</div>\n</body>\n</html>\n");
    Ok(out)
}

pub fn error_page(code: u16, message: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_head(&mut out, &format!("Erro {}", code))?;
    write!(
        out,
        r#"<div class="container py-5 text-center">
<h1 class="display-1">{code}</h1>
<p class="lead">{message}</p>
<a class="btn btn-primary" href="/">Voltar para o início</a>
</div>
</body>
</html>
"#,
        code = code,
        message = escape_html(message),
    )?;
    Ok(out)
}
