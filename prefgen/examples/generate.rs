//! Generates wrapper classes from a declaration file.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example generate -- prefs.xml [out_dir]
//! ```
//!
//! Without arguments a built-in declaration document is used and the
//! generated source is printed.

use prefgen::prelude::*;
use std::path::Path;

const SAMPLE: &str = r#"<declarations>
    <preferences name="UserSettings" package="com.example.settings" defaultType="string">
        <entry name="dark_mode" type="boolean" default="false"/>
        <entry name="username" key="pref_username"/>
        <entry name="MAX_RETRY_COUNT" type="integer" default="3"/>
        <entry name="favorite_tags" type="string_set"/>
    </preferences>
    <preferences name="SessionEditor" package="com.example.settings"
                 editor="chained" editorType="SharedPreferences.Editor">
        <entry name="last_sync" type="long"/>
        <entry name="notifications" type="boolean" booleanPrefix="has"/>
    </preferences>
</declarations>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GeneratorConfig::new().import("android.content.SharedPreferences");
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [] => print!("{}", generate_from_xml(SAMPLE, &config)?),
        [input] => print!("{}", generate_from_file(Path::new(input), &config)?),
        [input, out_dir, ..] => {
            let written = generate_to_dir(Path::new(input), Path::new(out_dir), &config)?;
            println!("Generated {} file(s)", written.len());
        }
    }

    Ok(())
}
