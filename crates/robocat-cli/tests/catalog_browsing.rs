//! Brands, Categories and Show Tests

use anyhow::Result;
use robocat_testing::{TestWorld, fixtures};

#[test]
fn test_brands_lists_counts() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());

    let result = world.run(&["brands", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    let brands = json["content"]["brands"].as_array().unwrap();
    assert_eq!(brands.len(), 3);
    assert_eq!(brands[0]["name"], "Acme");
    assert_eq!(brands[0]["category_count"], 2);
    assert_eq!(brands[0]["product_count"], 4);
    assert_eq!(json["content"]["total_products"], 7);
    Ok(())
}

#[test]
fn test_categories_merge_same_name_across_brands() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());

    let result = world.run(&["categories", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    let categories = json["content"]["categories"].as_array().unwrap();
    // "Lifting AMR" + "lifting amr" fold into one entry
    assert_eq!(categories.len(), 3);

    let lifting = &categories[0];
    assert_eq!(lifting["name"], "Lifting AMR");
    assert_eq!(lifting["product_count"], 4);
    assert_eq!(
        lifting["brands"].as_array().unwrap().len(),
        2,
        "both contributing brands listed"
    );
    Ok(())
}

#[test]
fn test_categories_scoped_to_brand_do_not_merge() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());

    let result = world.run(&["categories", "--brand", "busybot", "--format", "json"])?;

    let json = result.json()?;
    let categories = json["content"]["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "lifting amr");
    assert_eq!(categories[0]["product_count"], 1);
    Ok(())
}

#[test]
fn test_show_renders_detail_by_id() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());

    let result = world.run(&["show", "busy-b6", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["name"], "Busy B6");
    assert_eq!(json["content"]["brand"], "BusyBot");
    assert_eq!(json["content"]["route"], "/product/busy-b6");
    Ok(())
}

#[test]
fn test_show_plain_includes_brand_and_route() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());

    let result = world.run(&["show", "acme-1"])?;

    assert!(result.success());
    assert!(result.stdout.contains("Lift 1"));
    assert!(result.stdout.contains("Acme - Lifting AMR"));
    assert!(result.stdout.contains("Route: /product/acme-1"));
    Ok(())
}

#[test]
fn test_show_unknown_id_fails_with_guidance() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());

    let result = world.run(&["show", "no-such-robot"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("no-such-robot"));
    assert!(result.stderr.contains("robocat products"));
    Ok(())
}

#[test]
fn test_no_subcommand_prints_guidance() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());

    let result = world.run(&[])?;

    assert!(result.success());
    assert!(result.stdout.contains("Quick commands"));
    assert!(result.stdout.contains("3 brand(s)"));
    Ok(())
}
