//! The entry routine as seen by an external harness supplying its own
//! executor implementation.

use anyhow::{bail, Result};
use erun::{Executor, BANNER, ENTRY_INPUT};

struct HelloWorld;

impl Executor for HelloWorld {
    type Output = String;
    async fn execute(&self, _input: &str) -> Result<String> {
        Ok("hello world".to_string())
    }
}

struct Rejecting;

impl Executor for Rejecting {
    type Output = String;
    async fn execute(&self, _input: &str) -> Result<String> {
        bail!("no result today")
    }
}

struct EchoBack;

impl Executor for EchoBack {
    type Output = String;
    async fn execute(&self, input: &str) -> Result<String> {
        Ok(format!("hello {input}"))
    }
}

#[tokio::test]
async fn test_successful_run_prints_banner_then_result() -> Result<()> {
    let mut out = Vec::new();
    erun::run(&HelloWorld, &mut out).await?;
    assert_eq!(String::from_utf8(out)?, "Executing main\nhello world\n");
    Ok(())
}

#[tokio::test]
async fn test_failure_is_not_swallowed() {
    let mut out = Vec::new();
    let err = erun::run(&Rejecting, &mut out).await.unwrap_err();
    assert!(format!("{err}").contains("no result today"));
    assert_eq!(String::from_utf8(out).unwrap(), format!("{BANNER}\n"));
}

#[tokio::test]
async fn test_entry_input_reaches_the_executor() -> Result<()> {
    assert_eq!(ENTRY_INPUT, "world");
    let mut out = Vec::new();
    erun::run(&EchoBack, &mut out).await?;
    assert_eq!(String::from_utf8(out)?, "Executing main\nhello world\n");
    Ok(())
}
