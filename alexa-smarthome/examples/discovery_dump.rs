use alexa_smarthome::discovery::{
    DiscoveryPayloadBuilder, DisplayCategory, SemanticActionName, SemanticStateName,
};
use alexa_smarthome::envelope::Response;
use alexa_smarthome::resources::{asset_ids, Locale};

use clap::Parser;
use serde_json::json;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

// Simple program printing a sample discovery payload
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many blinds endpoints to generate
    #[arg(short, long, value_name = "CNT", default_value_t = 1)]
    count: usize,

    /// Wrap the payload into a Discover.Response event
    #[arg(short, long)]
    envelope: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    #[arg(short, long)]
    log_level: Option<LevelFilter>,
}

fn populate(builder: &mut DiscoveryPayloadBuilder, index: usize) -> alexa_smarthome::Result<()> {
    let endpoint = builder.add_discovery_endpoint(
        format!("blinds-{index:03}"),
        "Sample Manufacturer",
        "Motorized blinds by Sample Manufacturer",
        format!("Blinds {index}"),
    );

    endpoint
        .with_display_categories([DisplayCategory::InteriorBlind])
        .with_tcp_ip_connection(None)
        .with_cookie("room", "living")
        .add_additional_attributes()
        .with_manufacturer("Sample Manufacturer")
        .with_serial_number(format!("SN-{index:06}"));

    endpoint.add_capability("Alexa", "3");

    let position = endpoint
        .add_capability("Alexa.RangeController", "3")
        .with_instance(format!("Blind{index}.Position"))
        .with_asset_resource(asset_ids::SETTING_OPENING)
        .with_text_resource("Position", Locale::EnUs)
        .with_configuration(json!({
            "supportedRange": {"minimumValue": 0, "maximumValue": 100, "precision": 1},
            "unitOfMeasure": "Alexa.Unit.Percent"
        }));
    position
        .add_properties()
        .with_supported_properties(["rangeValue"])
        .with_proactively_reported(true)
        .with_retrievable(true);

    // Only the first blinds may answer to "open"/"close"
    if index == 0 {
        position
            .add_semantic_action("SetRangeValue")
            .with_actions([SemanticActionName::Open])
            .with_directive_payload(Some(json!({"rangeValue": 100})));
        position
            .add_semantic_action("SetRangeValue")
            .with_actions([SemanticActionName::Close])
            .with_directive_payload(Some(json!({"rangeValue": 0})));
    }
    position
        .add_semantic_state()
        .with_states([SemanticStateName::Closed])
        .with_value(0);
    position
        .add_semantic_state()
        .with_states([SemanticStateName::Open])
        .with_range(1, 100);

    Ok(())
}

fn main() -> miette::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(args.log_level.unwrap_or(LevelFilter::ERROR)))
        .init();

    let mut builder = DiscoveryPayloadBuilder::new();
    for index in 0..args.count {
        populate(&mut builder, index)?;
    }

    let payload = builder.build()?;

    let output = if args.envelope {
        serde_json::to_value(Response::discover(&payload)?)
    } else {
        serde_json::to_value(&payload)
    }
    .map_err(alexa_smarthome::Error::from)?;

    let text = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(alexa_smarthome::Error::from)?;

    println!("{}", text);
    Ok(())
}
