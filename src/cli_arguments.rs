use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Send one HTTP request and print the response", long_about = None)]
pub(crate) struct CliArguments {
    #[arg(long)]
    pub url: String,

    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Custom header as "Name: value"; repeatable
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    #[arg(short, long)]
    pub data: Option<String>,

    /// Parse --data as JSON and encode it per --content-type
    #[arg(long)]
    pub json: bool,

    /// Root element wrapping --json data when it is sent as XML
    #[arg(long, default_value = "request")]
    pub xml_root: String,

    #[arg(long, default_value = "")]
    pub content_type: String,

    /// Basic auth credentials as "user:password"
    #[arg(short, long, value_parser = parse_credentials)]
    pub user: Option<(String, String)>,

    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(long)]
    pub debug: bool,

    #[arg(long)]
    pub mock: bool,

    /// Decode the response body and pretty-print it as JSON; in mock mode
    /// the canned body is printed as is
    #[arg(long)]
    pub decode: bool,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("header `{raw}` must look like `Name: value`"))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn parse_credentials(raw: &str) -> Result<(String, String), String> {
    let (username, password) = raw.split_once(':').unwrap_or((raw, ""));
    Ok((username.to_string(), password.to_string()))
}
