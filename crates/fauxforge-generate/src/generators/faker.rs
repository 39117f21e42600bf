use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::RngCore;

use crate::generators::{GeneratorRegistry, ScalarGenerator};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(NameGenerator));
    registry.register_generator(Box::new(EmailGenerator));
    registry.register_generator(Box::new(StreetAddressGenerator));
    registry.register_generator(Box::new(CityGenerator));
    registry.register_generator(Box::new(CountryGenerator));
    registry.register_generator(Box::new(PhoneGenerator));
    registry.register_generator(Box::new(CompanyGenerator));
}

struct NameGenerator;

impl ScalarGenerator for NameGenerator {
    fn tag(&self) -> &'static str {
        "name"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        Name().fake_with_rng(rng)
    }
}

struct EmailGenerator;

impl ScalarGenerator for EmailGenerator {
    fn tag(&self) -> &'static str {
        "email"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        SafeEmail().fake_with_rng(rng)
    }
}

struct StreetAddressGenerator;

impl ScalarGenerator for StreetAddressGenerator {
    fn tag(&self) -> &'static str {
        "address"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        format!("{number} {street}")
    }
}

struct CityGenerator;

impl ScalarGenerator for CityGenerator {
    fn tag(&self) -> &'static str {
        "city"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        CityName().fake_with_rng(rng)
    }
}

struct CountryGenerator;

impl ScalarGenerator for CountryGenerator {
    fn tag(&self) -> &'static str {
        "country"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        CountryName().fake_with_rng(rng)
    }
}

struct PhoneGenerator;

impl ScalarGenerator for PhoneGenerator {
    fn tag(&self) -> &'static str {
        "phone"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        PhoneNumber().fake_with_rng(rng)
    }
}

struct CompanyGenerator;

impl ScalarGenerator for CompanyGenerator {
    fn tag(&self) -> &'static str {
        "company"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        CompanyName().fake_with_rng(rng)
    }
}

/// Single lorem word; used for tags with no registered generator.
pub struct LoremWordGenerator;

impl ScalarGenerator for LoremWordGenerator {
    fn tag(&self) -> &'static str {
        "lorem.word"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        let word: String = Word().fake_with_rng(rng);
        if word.is_empty() {
            "lorem".to_string()
        } else {
            word
        }
    }
}
