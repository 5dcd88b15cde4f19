//! End-to-end scenarios driving the registry the way a panel UI would:
//! build devices, add them, switch them, re-read the list after every step.

use smarthome_app::factory::create_device;
use smarthome_app::registry::SmartHome;
use smarthome_domain::device::{Device, DeviceCategory};
use smarthome_domain::error::{SmartHomeError, ValidationError};

fn on_states(home: &SmartHome) -> Vec<bool> {
    home.list().iter().map(|d| d.is_on).collect()
}

// ---------------------------------------------------------------------------
// Kitchen / Lounge / Main
// ---------------------------------------------------------------------------

#[test]
fn should_run_kitchen_lounge_main_scenario() {
    let mut home = SmartHome::new();
    home.add_device(Device::plug("Kitchen", 45).unwrap()).unwrap();
    home.add_device(Device::light("Lounge", 50).unwrap()).unwrap();
    home.add_device(Device::fridge("Main", 3).unwrap()).unwrap();

    home.toggle_all(true);
    assert_eq!(on_states(&home), [true, true, true]);

    home.toggle_device(1).unwrap();
    assert_eq!(on_states(&home), [true, false, true]);
    assert_eq!(home.device(1).unwrap().category(), DeviceCategory::Light);

    assert!(home.remove_device_by_name("Main").is_some());
    let names: Vec<String> = home.list().into_iter().map(|d| d.name).collect();
    assert_eq!(names, ["Kitchen", "Lounge"]);
}

#[test]
fn should_build_same_scenario_through_factory() {
    let mut home = SmartHome::new();
    for (category, name, value) in [
        ("SmartPlug", "Kitchen", 45),
        ("SmartLight", "Lounge", 50),
        ("SmartFridge", "Main", 3),
    ] {
        home.add_device(create_device(category, name, value).unwrap())
            .unwrap();
    }

    let listed = home.list();
    assert_eq!(listed[0].attribute_label, "Consumption Rate");
    assert_eq!(listed[0].attribute_value, 45);
    assert_eq!(listed[0].unit, "W");
    assert_eq!(listed[2].category, DeviceCategory::Fridge);
}

// ---------------------------------------------------------------------------
// Recoverable errors
// ---------------------------------------------------------------------------

#[test]
fn should_keep_registry_usable_after_every_error_kind() {
    let mut home = SmartHome::with_max_devices(2);
    home.add_device(Device::plug("Kitchen", 45).unwrap()).unwrap();
    home.add_device(Device::fridge("Main", 3).unwrap()).unwrap();

    assert!(matches!(
        home.add_device(Device::light("Lounge", 50).unwrap()),
        Err(SmartHomeError::CapacityExceeded(_))
    ));
    assert!(matches!(
        home.toggle_device(2),
        Err(SmartHomeError::IndexOutOfRange(_))
    ));
    assert!(matches!(
        home.set_device_attribute(1, 4),
        Err(SmartHomeError::Validation(ValidationError::NotAllowed { .. }))
    ));

    home.set_device_attribute(1, 5).unwrap();
    assert!(home.device(1).unwrap().status_text().contains("5°C"));

    home.remove_device(0).unwrap();
    home.add_device(Device::light("Lounge", 50).unwrap()).unwrap();
    assert_eq!(home.device_count(), 2);
    assert_eq!(home.device(0).unwrap().name(), "Main");
    assert_eq!(home.device(1).unwrap().name(), "Lounge");
}

#[test]
fn should_fail_construction_for_out_of_domain_values() {
    for (category, value) in [
        ("SmartPlug", -1),
        ("SmartPlug", 151),
        ("SmartLight", 0),
        ("SmartLight", 101),
        ("SmartFridge", 2),
    ] {
        assert!(
            matches!(
                create_device(category, "x", value),
                Err(SmartHomeError::Validation(_))
            ),
            "{category} {value} should be rejected"
        );
    }
}

// ---------------------------------------------------------------------------
// Index invalidation
// ---------------------------------------------------------------------------

#[test]
fn should_resolve_index_again_after_removal() {
    let mut home = SmartHome::new();
    home.add_device(Device::plug("Kitchen", 45).unwrap()).unwrap();
    home.add_device(Device::light("Lounge", 50).unwrap()).unwrap();
    home.add_device(Device::fridge("Main", 3).unwrap()).unwrap();

    let (fridge_index, _) = home.find_by_name("Main").unwrap();
    assert_eq!(fridge_index, 2);

    home.remove_device(0).unwrap();
    assert!(home.toggle_device(fridge_index).is_err());

    let (fridge_index, _) = home.find_by_name("Main").unwrap();
    assert!(home.toggle_device(fridge_index).unwrap());
}
