use super::*;

#[test]
fn activates_once_per_mount() {
    let mut lifecycle = MountLifecycle::default();
    let first = lifecycle.activate().expect("first activation");
    assert!(lifecycle.activate().is_none());
    assert!(lifecycle.activate().is_none());
    assert!(lifecycle.is_current(first));
}

#[test]
fn remount_issues_a_new_id_and_retires_the_old_one() {
    let mut lifecycle = MountLifecycle::default();
    let first = lifecycle.activate().expect("first activation");
    assert_eq!(lifecycle.teardown(), Some(first));
    assert!(!lifecycle.is_current(first));

    let second = lifecycle.activate().expect("second activation");
    assert_ne!(first, second);
    assert!(lifecycle.is_current(second));
    assert!(!lifecycle.is_current(first));
}

#[test]
fn teardown_without_mount_is_a_no_op() {
    let mut lifecycle = MountLifecycle::default();
    assert_eq!(lifecycle.teardown(), None);
    assert!(!lifecycle.is_current(MountId(0)));
}
