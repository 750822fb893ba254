use std::cell::RefCell;

use super::*;

fn run_with_guard(log: &RefCell<Vec<bool>>, fail: bool) -> Result<(), &'static str> {
    let _guard = FormGuard::acquire(|disabled| log.borrow_mut().push(disabled));
    if fail {
        return Err("request failed");
    }
    Ok(())
}

#[test]
fn guard_disables_then_enables_on_success() {
    let log = RefCell::new(Vec::new());
    assert!(run_with_guard(&log, false).is_ok());
    assert_eq!(*log.borrow(), vec![true, false]);
}

#[test]
fn guard_enables_on_early_return() {
    let log = RefCell::new(Vec::new());
    assert!(run_with_guard(&log, true).is_err());
    assert_eq!(*log.borrow(), vec![true, false]);
}

#[test]
fn guard_enables_during_unwind() {
    let log = RefCell::new(Vec::new());
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = FormGuard::acquire(|disabled| log.borrow_mut().push(disabled));
        panic!("handler blew up");
    }));
    assert!(result.is_err());
    assert_eq!(*log.borrow(), vec![true, false]);
}

#[test]
fn form_stays_disabled_while_guard_is_held() {
    let log = RefCell::new(Vec::new());
    let guard = FormGuard::acquire(|disabled| log.borrow_mut().push(disabled));
    assert_eq!(*log.borrow(), vec![true]);
    drop(guard);
    assert_eq!(*log.borrow(), vec![true, false]);
}
