use anyhow::{Context, Result};

use zq::{format, monthly_index_now, AggType, SearchRequest, ZincClient};

pub struct SearchOpts {
    pub url: String,
    pub user: String,
    pub password: String,
    pub index: String,
    pub term: String,
    pub sort: Vec<String>,
    pub from: usize,
    pub limit: usize,
    pub agg_specs: Vec<String>,
    pub source: Vec<String>,
    pub pretty: bool,
    pub monthly_prefix: bool,
}

/// Run search command
pub async fn run_search(opts: SearchOpts) -> Result<()> {
    let index = if opts.monthly_prefix {
        monthly_index_now(&opts.index)
    } else {
        opts.index.clone()
    };

    let mut request = SearchRequest::query_string(&opts.term)
        .page(opts.from, opts.limit)
        .source_fields(opts.source);
    for field in &opts.sort {
        request = request.sort_by(field);
    }
    for spec in &opts.agg_specs {
        let (name, agg_type, field) = parse_agg_spec(spec)?;
        request = request.agg(name, agg_type, field);
    }

    tracing::info!(%index, term = %opts.term, "searching");

    let client = ZincClient::new(&opts.url, &opts.user, &opts.password)?;
    let resp = client.search(&index, &request).await?;

    if !resp.is_success() {
        tracing::warn!(status = %resp.status, "server returned non-success status");
    }

    // Print whatever the server sent, error payloads included.
    if opts.pretty {
        println!("{}", format::pretty(&resp.body)?);
    } else {
        println!("{}", resp.body);
    }

    Ok(())
}

/// Parse `NAME=TYPE:FIELD` into an aggregation triple.
fn parse_agg_spec(spec: &str) -> Result<(&str, AggType, &str)> {
    let (name, rest) = spec
        .split_once('=')
        .with_context(|| format!("invalid agg spec '{}', expected NAME=TYPE:FIELD", spec))?;
    let (type_name, field) = rest
        .split_once(':')
        .with_context(|| format!("invalid agg spec '{}', expected NAME=TYPE:FIELD", spec))?;
    let agg_type = match type_name {
        "max" => AggType::Max,
        "min" => AggType::Min,
        "avg" => AggType::Avg,
        "sum" => AggType::Sum,
        "count" => AggType::Count,
        other => anyhow::bail!("unknown agg type '{}'", other),
    };
    if name.is_empty() || field.is_empty() {
        anyhow::bail!("invalid agg spec '{}', expected NAME=TYPE:FIELD", spec);
    }
    Ok((name, agg_type, field))
}
