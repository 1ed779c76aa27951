use anyhow::{Result, bail};
use somalid_validator::{MaskSpec, mask_id};

pub fn execute(id: &str, head: usize, tail: usize) -> Result<()> {
    if !id.chars().any(|c| c.is_ascii_digit()) {
        bail!("Id number contains no digits: {}", id);
    }

    println!("{}", mask_id(id, MaskSpec::new(head, tail)));
    Ok(())
}
