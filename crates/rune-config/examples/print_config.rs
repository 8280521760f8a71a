/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Configuration ===\n");

    println!("Display Settings:");
    println!("  Scale Factor: {:?}", config.display.scale_factor);
    println!("  UI Scale: {}", config.display.ui_scale);
    println!("  Logical Pixels: {}", config.display.logical_pixels);
    println!();

    println!("Asset Settings:");
    println!("  Root: {:?}", config.assets.root);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
