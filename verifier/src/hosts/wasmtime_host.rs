//! wasmtime-backed host. One shared engine, a fresh store per artifact so
//! nothing leaks between variants.

use crate::{Error, Host, Result};
use wasmtime::{Engine, Instance, Module, Store};

/// Real wasm host used by the smoke CLI and the integration tests.
pub struct WasmtimeHost {
    engine: Engine,
}

/// An instantiated artifact plus the store its state lives in.
pub struct WasmtimeInstance {
    store: Store<()>,
    instance: Instance,
}

impl WasmtimeHost {
    pub fn new() -> Result<Self> {
        let mut config = wasmtime::Config::new();
        config.cranelift_opt_level(wasmtime::OptLevel::Speed);
        let engine = Engine::new(&config).map_err(|err| Error::Host {
            reason: err.to_string(),
        })?;
        Ok(Self { engine })
    }
}

impl Host for WasmtimeHost {
    type Instance = WasmtimeInstance;

    fn instantiate(&self, bytes: &[u8]) -> Result<Self::Instance> {
        let module = Module::from_binary(&self.engine, bytes).map_err(|err| {
            Error::Instantiation {
                reason: err.to_string(),
            }
        })?;
        let mut store = Store::new(&self.engine, ());
        // The smoke artifacts import nothing, so the linker stays empty.
        let instance =
            Instance::new(&mut store, &module, &[]).map_err(|err| Error::Instantiation {
                reason: err.to_string(),
            })?;
        Ok(WasmtimeInstance { store, instance })
    }

    fn call_i32(&self, instance: &mut Self::Instance, export: &str, arg: i32) -> Result<i32> {
        let func = instance
            .instance
            .get_typed_func::<i32, i32>(&mut instance.store, export)
            .map_err(|err| Error::MissingExport {
                name: export.to_string(),
                reason: err.to_string(),
            })?;
        func.call(&mut instance.store, arg).map_err(|err| Error::Call {
            export: export.to_string(),
            reason: err.to_string(),
        })
    }
}
