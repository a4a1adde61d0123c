//! Catalog fixtures for integration tests.
//!
//! The canned catalog is intentionally awkward: two brands share a
//! category name with different casing, and product names interleave
//! numbers so default lexical ordering would get them wrong.

use serde_json::{Value, json};

/// A three-brand catalog exercising cross-brand category merging and
/// natural name ordering.
pub fn sample_catalog() -> Value {
    json!({
        "brands": [
            {
                "id": "acme",
                "name": "Acme",
                "categories": [
                    {
                        "id": "acme-lifting",
                        "name": "Lifting AMR",
                        "products": [
                            product("acme-10", "Lift 10", "Payload 1000 kg"),
                            product("acme-2", "Lift 2", "Payload 200 kg"),
                            product("acme-1", "Lift 1", "Payload 100 kg")
                        ]
                    },
                    {
                        "id": "acme-tractor",
                        "name": "Tractor AGV",
                        "products": [
                            product("acme-t25", "Tow 25", "25 t towing")
                        ]
                    }
                ]
            },
            {
                "id": "busybot",
                "name": "BusyBot",
                "categories": [
                    {
                        "id": "busybot-lifting",
                        "name": "lifting amr",
                        "products": [
                            product("busy-b6", "Busy B6", "600 kg compact")
                        ]
                    }
                ]
            },
            {
                "id": "cargogo",
                "name": "CargoGo",
                "categories": [
                    {
                        "id": "cargogo-forklift",
                        "name": "Forklift AGV",
                        "products": [
                            product("cargo-f14", "Fork 14", "1.4 t forks"),
                            product("cargo-f2", "Fork 2", "Light forks")
                        ]
                    }
                ]
            }
        ]
    })
}

/// One brand, one category. Brand filter and brand-less category filter
/// converge on the same product set here.
pub fn single_brand_catalog() -> Value {
    json!({
        "brands": [
            {
                "id": "solo",
                "name": "Solo Robotics",
                "categories": [
                    {
                        "id": "solo-latent",
                        "name": "Latent AMR",
                        "products": [
                            product("solo-2", "Solo 2", "Second model"),
                            product("solo-1", "Solo 1", "First model")
                        ]
                    }
                ]
            }
        ]
    })
}

pub fn empty_catalog() -> Value {
    json!({ "brands": [] })
}

fn product(id: &str, name: &str, line1: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "image": format!("images/{id}.png"),
        "description": { "line1": line1 }
    })
}
