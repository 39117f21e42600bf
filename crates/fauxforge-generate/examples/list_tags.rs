use fauxforge_generate::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for tag in registry.tags() {
        println!("{tag}");
    }
}
