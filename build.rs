use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Only the commit is needed, for `stagegen --version` long output.
    vergen_gitcl::Emitter::default()
        .add_instructions(&vergen_gitcl::GitclBuilder::default().sha(true).build()?)?
        .emit()?;
    Ok(())
}
