//! Tests for instance construction and validation.

use crate::error::StructuralError;
use crate::instance::Instance;

#[test]
fn test_empty_universe_rejected() {
    assert_eq!(
        Instance::<f64>::new(0).unwrap_err(),
        StructuralError::EmptyUniverse
    );
}

#[test]
fn test_set_indices_follow_insertion_order() {
    let mut instance: Instance<f64> = Instance::new(3).unwrap();
    instance.add_set(5.0, vec![0]);
    instance.add_set(1.0, vec![1, 2]);

    assert_eq!(instance.set_count(), 2);
    assert_eq!(instance.set(0), &[0]);
    assert_eq!(instance.set(1), &[1, 2]);
    assert_eq!(instance.cost(0), 5.0);
    assert_eq!(instance.cost(1), 1.0);
}

#[test]
fn test_validate_accepts_consistent_instance() {
    let mut instance: Instance<f64> = Instance::new(2).unwrap();
    instance.add_set(1.0, vec![0, 1]);
    instance.add_set(0.0, vec![1, 1]);
    assert!(instance.validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_element() {
    let mut instance: Instance<f64> = Instance::new(2).unwrap();
    instance.add_set(1.0, vec![0]);
    instance.add_set(1.0, vec![1, 2]);

    assert_eq!(
        instance.validate().unwrap_err(),
        StructuralError::ElementOutOfRange {
            set: 1,
            element: 2,
            element_count: 2,
        }
    );
}

#[test]
fn test_frequency_counts_distinct_memberships() {
    let mut instance: Instance<f64> = Instance::new(3).unwrap();
    instance.add_set(1.0, vec![0, 1]);
    instance.add_set(1.0, vec![1, 2]);
    instance.add_set(1.0, vec![1, 1]);
    assert_eq!(instance.frequency(), 3);
}

#[test]
fn test_frequency_of_empty_family_is_zero() {
    let instance: Instance<f64> = Instance::new(4).unwrap();
    assert_eq!(instance.frequency(), 0);
}

#[test]
fn test_total_cost_and_is_cover() {
    let mut instance: Instance<f64> = Instance::new(3).unwrap();
    instance.add_set(2.0, vec![0, 1]);
    instance.add_set(3.0, vec![2]);
    instance.add_set(10.0, vec![0, 1, 2]);

    assert_eq!(instance.total_cost(&[0, 1]), 5.0);
    assert!(instance.is_cover(&[0, 1]));
    assert!(instance.is_cover(&[2]));
    assert!(!instance.is_cover(&[0]));
}
