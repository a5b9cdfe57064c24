//! One-shot tool commands
//!
//! Run a single geology tool from the command line and print the result.

use crate::cli::init_logging;
use crate::config::Config;
use crate::error::Result;
use crate::geo::BoundingBox;
use crate::tools::GeologyTools;
use clap::Args;

/// Location command arguments
#[derive(Args)]
pub struct LocationArgs {
    /// Latitude (WGS84)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude (WGS84)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Geology layer (bedrock, superficial_deposits, ...)
    #[arg(long, short = 't')]
    pub geology_type: Option<String>,

    /// Response format: text/html, text/xml or text/plain
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Map URL command arguments
#[derive(Args)]
pub struct MapUrlArgs {
    /// Layer name (friendly or WMS identifier)
    pub layer: String,

    /// South boundary
    #[arg(long, allow_hyphen_values = true)]
    pub min_lat: f64,

    /// West boundary
    #[arg(long, allow_hyphen_values = true)]
    pub min_lon: f64,

    /// North boundary
    #[arg(long, allow_hyphen_values = true)]
    pub max_lat: f64,

    /// East boundary
    #[arg(long, allow_hyphen_values = true)]
    pub max_lon: f64,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Image format: image/png, image/gif or image/jpeg
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Layers command arguments
#[derive(Args)]
pub struct LayersArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

fn load_tools() -> Result<(Config, GeologyTools)> {
    let config = Config::load()?;
    let tools = GeologyTools::from_config(&config)?;
    Ok((config, tools))
}

/// Run the location command
pub async fn location(args: LocationArgs) -> Result<()> {
    init_logging("warn");
    let (config, tools) = load_tools()?;

    let text = tools
        .query_location(
            args.lat,
            args.lon,
            args.geology_type
                .as_deref()
                .unwrap_or(&config.defaults.geology_type),
            args.format.as_deref().unwrap_or(&config.defaults.info_format),
        )
        .await?;

    println!("{}", text);
    Ok(())
}

/// Run the map-url command
pub fn map_url(args: MapUrlArgs) -> Result<()> {
    let (config, tools) = load_tools()?;

    let url = tools.map_url(
        &args.layer,
        BoundingBox::new(args.min_lat, args.min_lon, args.max_lat, args.max_lon),
        args.width.unwrap_or(config.defaults.width),
        args.height.unwrap_or(config.defaults.height),
        args.format.as_deref().unwrap_or(&config.defaults.image_format),
    )?;

    println!("{}", url);
    Ok(())
}

/// Run the layers command
pub fn layers(args: LayersArgs) -> Result<()> {
    let (_, tools) = load_tools()?;
    let catalog = tools.get_available_geology_layers();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for (name, info) in &catalog {
        println!("{:<22} {:<30} {}", name, info.layer_name, info.description);
    }
    Ok(())
}

/// Run the capabilities command
pub async fn capabilities() -> Result<()> {
    init_logging("warn");
    let (_, tools) = load_tools()?;

    let body = tools.client().get_capabilities().await?;
    println!("{}", body);
    Ok(())
}

/// Run the info command
pub fn info() -> Result<()> {
    let (_, tools) = load_tools()?;
    println!("{}", tools.get_service_info());
    Ok(())
}
