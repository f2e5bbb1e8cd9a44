use super::*;

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn simulation_failed_message_formats_status() {
    assert_eq!(simulation_failed_message(503), "simulation failed: 503");
}
