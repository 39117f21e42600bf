use fauxforge_core::api_json_schemas;

fn main() {
    let schemas = api_json_schemas();
    let json = serde_json::to_string_pretty(&schemas).expect("serialize json schemas");
    println!("{json}");
}
