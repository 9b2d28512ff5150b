use creational_patterns::domains::car::{
    construct_variant, Car, CarFactory, CarModel, Manufacturer,
};
use creational_patterns::domains::furniture::{create_furniture, furniture_registry};
use creational_patterns::domains::theme::{create_theme, theme_registry, PlainTheme, Theme};
use creational_patterns::{prefix_label, FactoryError, FallbackPolicy, FamilyRegistry};

#[test]
fn test_windows_theme_end_to_end() {
    let registry = theme_registry("Mac");
    let theme = create_theme(&registry, "windows").unwrap();
    let base = PlainTheme;

    assert_eq!(theme.create_button(), "windowsButton");
    assert_eq!(theme.create_label(), "windowsLabel");
    assert_eq!(theme.create_button(), prefix_label("windows", &base.create_button()));
    assert_eq!(theme.create_label(), prefix_label("windows", &base.create_label()));
}

#[test]
fn test_royal_sofa_and_boundary_policy() {
    let registry = furniture_registry(FallbackPolicy::Base);
    assert_eq!(create_furniture(&registry, "Royal").unwrap().create_sofa(), "RoyalSofa");
    assert_eq!(create_furniture(&registry, "nonexistent").unwrap().create_sofa(), "Sofa");
}

#[test]
fn test_every_car_combination_composes() {
    let factory = CarFactory::default();
    for manufacturer in ["BMW", "Mercedes"] {
        for variant in ["luxury", "mini", "micro"] {
            let built = factory.create_car(manufacturer, variant).unwrap().build();
            let bound = Car::new(Manufacturer::new(manufacturer));
            assert_eq!(built, construct_variant(variant, &bound.build()));
        }
    }
}

#[test]
fn test_custom_family_registry() {
    let registry: FamilyRegistry<Box<dyn Theme>, Box<dyn Theme>> =
        theme_registry("Mac").reject_unknown();
    let err = create_theme(&registry, "beos")
        .map(|theme| theme.create_label())
        .unwrap_err();
    assert_eq!(
        err,
        FactoryError::UnknownDiscriminator {
            discriminator: "beos".to_string(),
            known: vec!["Mac".to_string(), "windows".to_string()],
        }
    );
}
