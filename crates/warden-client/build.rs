use anyhow::{Context, Result};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=.schema/schema.graphql");
    std::fs::read_to_string(".schema/schema.graphql").context(
        "no schema found at ./.schema/schema.graphql, which is needed to generate types for the policy operations",
    )?;
    Ok(())
}
