use std::path::Path;

use wasi_common::pipe::{ReadPipe, WritePipe};
use wasi_common::I32Exit;
use wasmtime::*;
use wasmtime_wasi::{WasiCtx, WasiCtxBuilder};

use crate::output::FunctionResult;
use crate::{Error, Result};

/// Executes compiled discount functions as WASI commands.
///
/// The input document is fed to the function's stdin and whatever it writes
/// to stdout is decoded as a [`FunctionResult`]. Stderr is inherited so the
/// function's own logs stay visible.
pub struct FunctionRunner {
    engine: Engine,
}

impl Default for FunctionRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRunner {
    pub fn new() -> Self {
        tracing::debug!("Starting WASM engine");
        Self {
            engine: Engine::default(),
        }
    }

    /// Compiles a module from binary or text format.
    pub fn compile(&self, bytes: impl AsRef<[u8]>) -> Result<Module> {
        Ok(Module::new(&self.engine, bytes)?)
    }

    pub fn load(&self, path: &Path) -> Result<Module> {
        tracing::info!(path = %path.display(), "loading function module");
        Ok(Module::from_file(&self.engine, path)?)
    }

    pub fn run(&self, module: &Module, input: &serde_json::Value) -> Result<FunctionResult> {
        let serialized_input = serde_json::to_string(input)?;

        let mut linker: Linker<WasiCtx> = Linker::new(&self.engine);
        wasmtime_wasi::add_to_linker(&mut linker, |s| s)?;

        let stdin = ReadPipe::from(serialized_input);
        let stdout = WritePipe::new_in_memory();

        let wasi = WasiCtxBuilder::new()
            .stdin(Box::new(stdin.clone()))
            .stdout(Box::new(stdout.clone()))
            .inherit_stderr()
            .build();
        let mut store = Store::new(&self.engine, wasi);

        linker.module(&mut store, "", module)?;
        let outcome = linker
            .get_default(&mut store, "")?
            .typed::<(), ()>(&store)?
            .call(&mut store, ());

        drop(store);

        if let Err(err) = outcome {
            match err.downcast_ref::<I32Exit>() {
                Some(I32Exit(0)) => {}
                Some(I32Exit(code)) => {
                    tracing::error!(code, "function exited with an error");
                    return Err(Error::FunctionExit { code: *code });
                }
                None => return Err(err.into()),
            }
        }

        let contents: Vec<u8> = stdout
            .try_into_inner()
            .map_err(|_err| Error::ErrorValue("function stdout is still borrowed".to_string()))?
            .into_inner();
        tracing::trace!(bytes = contents.len(), "function finished");

        serde_json::from_slice(&contents).map_err(Error::InvalidOutput)
    }
}
