use alexa_smarthome::discovery::{DiscoveryPayloadBuilder, DisplayCategory, SemanticActionName};
use alexa_smarthome::limits::MAX_ENDPOINTS;
use divan::black_box;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

fn full_payload() -> DiscoveryPayloadBuilder {
    let mut builder = DiscoveryPayloadBuilder::new();
    for index in 0..MAX_ENDPOINTS {
        let endpoint = builder.add_discovery_endpoint(
            format!("endpoint-{index}"),
            "Sample Manufacturer",
            "Benchmark device",
            format!("Device {index}"),
        );
        endpoint.with_display_categories([DisplayCategory::Light]);
        endpoint
            .add_capability("Alexa.PowerController", "3")
            .add_properties()
            .with_supported_properties(["powerState"]);
        if index == 0 {
            endpoint
                .add_capability("Alexa.ToggleController", "3")
                .with_instance("Light.Shade")
                .add_semantic_action("TurnOn")
                .with_actions([SemanticActionName::Raise]);
        }
    }
    builder
}

// Benchmark realizing a discovery payload with the maximum number of endpoints
#[divan::bench]
fn build_max_endpoints(bencher: divan::Bencher) {
    let builder = full_payload();
    bencher.bench(|| black_box(&builder).build().expect("valid payload"));
}
