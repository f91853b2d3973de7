use clap::{Args, Parser, Subcommand};
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "motorbrew-cli")]
#[command(about = "Command-line client for the MotorBrew intake service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Value sent as x-api-key on uploads.
    #[arg(short, long, default_value = "cli")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload item counts, e.g. `upload banana=1 clock=2`
    Upload {
        #[arg(required = true, value_parser = parse_item)]
        items: Vec<(String, Value)>,
    },
    /// List stored uploads
    Uploads,
    /// Clear stored uploads
    Reset,
    /// Replace the saved angles
    SaveAngles(AngleArgs),
    /// Show the saved angles
    GetAngles,
    /// Print the QR label text for a slot (1-5)
    Label {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        slot: u8,
    },
}

#[derive(Args)]
struct AngleArgs {
    #[arg(long)]
    angle1: Option<f64>,
    #[arg(long)]
    angle2: Option<f64>,
    #[arg(long)]
    angle3: Option<f64>,
    #[arg(long)]
    angle4: Option<f64>,
    #[arg(long)]
    angle5: Option<f64>,
}

impl AngleArgs {
    fn to_json(&self) -> Value {
        let values = [self.angle1, self.angle2, self.angle3, self.angle4, self.angle5];
        let map: Map<String, Value> = values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (format!("angle{}", i + 1), number(v))))
            .collect();
        Value::Object(map)
    }
}

/// Whole numbers go out as integers so labels read `30`, not `30.0`.
fn number(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

fn parse_item(s: &str) -> Result<(String, Value), String> {
    let (name, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=COUNT, got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("missing item name in '{s}'"));
    }
    let count = count
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(count.to_string()));
    Ok((name.to_string(), count))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Upload { items } => {
            let data: Map<String, Value> = items.into_iter().collect();
            client
                .post(format!("{base}/upload/"))
                .header("x-api-key", &cli.key)
                .json(&serde_json::json!({ "data": data }))
                .send()
                .await?
        }
        Commands::Uploads => client.get(format!("{base}/uploads/")).send().await?,
        Commands::Reset => client.post(format!("{base}/reset/")).send().await?,
        Commands::SaveAngles(angles) => {
            client
                .post(format!("{base}/save_angles"))
                .json(&angles.to_json())
                .send()
                .await?
        }
        Commands::GetAngles => client.get(format!("{base}/get_angles")).send().await?,
        Commands::Label { slot } => client.get(format!("{base}/qr{slot}")).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let is_json = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    if is_json {
        let json: Value = serde_json::from_str(&text)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
