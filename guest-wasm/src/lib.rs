#![cfg_attr(target_arch = "wasm32", no_std)]

/// Smoke export checked by the verifier: `double(2)` must be 4.
#[no_mangle]
pub extern "C" fn double(value: i32) -> i32 {
    value * 2
}

/// Abort-on-panic for no_std wasm builds.
#[cfg(all(target_arch = "wasm32", not(test)))]
#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[cfg(test)]
mod tests {
    use super::double;

    #[test]
    fn doubles_its_input() {
        assert_eq!(double(2), 4);
        assert_eq!(double(-3), -6);
    }
}
