use crate::services::slug::slugify;
use anyhow::Result;

pub async fn run(title: &str) -> Result<()> {
    println!("{}", slugify(title));
    Ok(())
}
