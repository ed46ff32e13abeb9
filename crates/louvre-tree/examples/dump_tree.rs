use std::io::Read;

use louvre_tree::{BlockCollector, TagRegistry};

fn main() {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source).unwrap();

    println!("=== Blocks ===");
    let registry = TagRegistry::with_builtins();
    for block in BlockCollector::new(&source, &registry) {
        println!("{:?}", block);
    }

    println!("\n=== Tree ===");
    match louvre_tree::parse(&source) {
        Ok(tree) => {
            print!("{}", tree);
            if !tree.is_balanced() {
                println!("(ended inside {})", tree.head().kind());
            }
        }
        Err(err) => eprint!("{}", err.render("<stdin>", &source)),
    }
}
