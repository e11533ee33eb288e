use anyhow::Result;
use specname_core::clean_join;

/// Print the tokens joined the way full names are joined.
pub fn join_command(tokens: &[String]) -> Result<()> {
    println!("{}", clean_join(tokens.iter().map(Some)));
    Ok(())
}
