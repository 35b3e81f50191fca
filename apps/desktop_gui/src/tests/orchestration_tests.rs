use super::*;
use crate::controller::lifecycle::MountId;
use crossbeam_channel::bounded;

#[test]
fn queues_command_when_worker_is_listening() {
    let (tx, rx) = bounded(1);
    assert!(dispatch_backend_command(
        &tx,
        BackendCommand::LoadFlights { mount: MountId(0) }
    ));
    assert!(matches!(
        rx.try_recv(),
        Ok(BackendCommand::LoadFlights { mount: MountId(0) })
    ));
}

#[test]
fn reports_full_and_disconnected_queues() {
    let (tx, rx) = bounded(1);
    assert!(dispatch_backend_command(
        &tx,
        BackendCommand::LoadFlights { mount: MountId(0) }
    ));
    assert!(!dispatch_backend_command(
        &tx,
        BackendCommand::LoadFlights { mount: MountId(1) }
    ));

    drop(rx);
    assert!(!dispatch_backend_command(
        &tx,
        BackendCommand::LoadFlights { mount: MountId(2) }
    ));
}
