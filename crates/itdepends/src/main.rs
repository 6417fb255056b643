use anyhow::Result;

fn main() -> Result<()> {
    itdepends_lib::main()
}
