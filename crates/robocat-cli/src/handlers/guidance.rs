use robocat_engine::CatalogStore;

/// Shown when robocat runs without a subcommand.
pub fn handle(store: &CatalogStore) {
    println!("robocat - Robot product catalog browser\n");

    println!(
        "Catalog loaded: {} brand(s), {} product(s)\n",
        store.brands().len(),
        store.catalog().product_count()
    );

    println!("Quick commands:");
    println!("  robocat brands                        # List brands");
    println!("  robocat categories                    # Categories merged across brands");
    println!("  robocat products --brand <BRAND>      # Products of one brand");
    println!("  robocat show <PRODUCT-ID>             # Product detail page");
    println!("  robocat browse                        # Interactive browser\n");

    println!("For more commands:");
    println!("  robocat --help");
}
