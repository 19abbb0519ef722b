//! Demo shell
//!
//! Builds a small page, mounts a tab group over it and drives a few
//! interactions: clicks, URL synchronization through a query parameter, and
//! restore-on-mount against the rewritten URL.

use std::sync::Arc;

use anyhow::Result;
use tabzy_core::{
    ChangeEvent, Config, Document, Element, LocationDriver, MemoryLocation, TabGroup,
};

const CONFIG_JSON: &str = r#"{
    "active_class_name": "tabzy-active",
    "remember": true,
    "param_key": "tab"
}"#;

fn build_page() -> Document {
    let nav = Element::new("nav")
        .with_id("fancy-tabs")
        .with_child(
            Element::new("a")
                .with_attr("href", "#overview")
                .with_text("Overview"),
        )
        .with_child(
            Element::new("a")
                .with_attr("href", "#pricing")
                .with_text("Pricing"),
        )
        .with_child(Element::new("a").with_attr("href", "#faq").with_text("FAQ"));

    let root = Element::new("body")
        .with_child(nav)
        .with_child(Element::new("section").with_id("overview"))
        .with_child(Element::new("section").with_id("pricing"))
        .with_child(Element::new("section").with_id("faq"));

    Document::new(root)
}

fn main() -> Result<()> {
    tabzy_core::init_logging();

    let mut config = Config::from_json(CONFIG_JSON)?;
    config.on_change = Some(Arc::new(|event: &ChangeEvent| {
        println!("switched to {} ({})", event.key, event.tab.text());
    }));

    let location = MemoryLocation::new("https://example.com/docs?lang=en")?;
    let driver: Arc<dyn LocationDriver> = Arc::new(location.clone());

    let document = build_page();
    tracing::info!("demo page built");

    let group = TabGroup::mount(
        document.clone(),
        Arc::clone(&driver),
        "#fancy-tabs",
        config.clone(),
    );

    println!("mounted, active tab: {}", group.active_pair().map(|p| p.key).unwrap_or_default());

    // Simulate user clicks
    group.pairs()[1].tab.click();
    group.pairs()[2].tab.click();
    println!("url after clicks: {}", location.current());

    group.destroy();

    // A fresh mount restores the remembered tab from the URL, silently
    let restored = TabGroup::mount(document, driver, "#fancy-tabs", config);
    if let Some(pair) = restored.active_pair() {
        println!("restored active tab: {}", pair.key);
    }

    Ok(())
}
