use anyhow::{Context, Result};
use bao_init::config::Settings;
use bao_init::discovery::{ConsulCatalog, ServiceCatalog};
use bao_init::error::InitError;
use bao_init::openbao::HttpNodeApi;
use bao_init::probe::NodeApi;
use bao_init::{Action, Args, InitRequest, NodeAddress, NodeStatus, Orchestrator};
use tracing::info;

use crate::cli::output::{
    print_ambiguous, print_env_hint, print_init_result, print_redirect, render_key_material,
};
use crate::i18n::Messages;

const EXIT_NOT_INITIALIZED: u8 = 2;

/// How a successful run ends. Failures are reported through `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InitExit {
    Success,
    NotInitialized,
}

impl InitExit {
    pub(crate) fn code(self) -> u8 {
        match self {
            InitExit::Success => 0,
            InitExit::NotInitialized => EXIT_NOT_INITIALIZED,
        }
    }
}

/// What to do with the chosen node: initialize it, or only report its status.
enum Mode {
    Initialize(InitRequest),
    Check,
}

pub(crate) async fn run_init(args: &Args, messages: &Messages) -> Result<InitExit> {
    let mut settings =
        Settings::new(args.config.clone()).with_context(|| messages.error_load_config())?;
    settings.merge_with_args(args);
    settings
        .validate()
        .with_context(|| messages.error_load_config())?;

    let mode = if args.check {
        Mode::Check
    } else {
        let params = settings
            .init_params()
            .with_context(|| messages.error_invalid_request())?;
        Mode::Initialize(
            InitRequest::new(params).with_context(|| messages.error_invalid_request())?,
        )
    };

    let timeout = settings.timeout()?;
    let nodes = HttpNodeApi::new(timeout).with_context(|| messages.error_client_create_failed())?;
    let catalog = ConsulCatalog::new(settings.consul_settings(), timeout)
        .with_context(|| messages.error_client_create_failed())?;
    let orchestrator = Orchestrator::new(catalog, nodes);

    match &args.auto {
        Some(service) => run_discovered(&orchestrator, service, &mode, messages).await,
        None => {
            let address = NodeAddress::new(settings.address.trim());
            run_on_target(&orchestrator, &address, &mode, messages).await
        }
    }
}

async fn run_discovered<C, N>(
    orchestrator: &Orchestrator<C, N>,
    service: &str,
    mode: &Mode,
    messages: &Messages,
) -> Result<InitExit>
where
    C: ServiceCatalog,
    N: NodeApi,
{
    let action = orchestrator
        .discover(service)
        .await
        .with_context(|| messages.error_discovery_failed(service))?;
    info!("Selected action: {action:?}");

    match action {
        Action::ReportRedirect(address) => {
            print_redirect(&address, messages);
            Ok(InitExit::Success)
        }
        Action::ReportNotFound => anyhow::bail!(messages.error_not_found(service)),
        Action::ReportAmbiguous(addresses) => {
            print_ambiguous(service, &addresses, messages);
            Ok(InitExit::Success)
        }
        Action::AutoInit(address) => {
            println!("{}", messages.discovered_uninitialized(address.as_str()));
            let outcome = run_on_target(orchestrator, &address, mode, messages).await;
            // Shown whether or not the init succeeded.
            print_env_hint(&address, messages);
            outcome
        }
    }
}

async fn run_on_target<C, N>(
    orchestrator: &Orchestrator<C, N>,
    address: &NodeAddress,
    mode: &Mode,
    messages: &Messages,
) -> Result<InitExit>
where
    C: ServiceCatalog,
    N: NodeApi,
{
    match mode {
        Mode::Check => {
            let status = orchestrator
                .check_status(address)
                .await
                .with_context(|| messages.error_check_failed())?;
            match status {
                NodeStatus::Initialized => {
                    println!("{}", messages.check_initialized());
                    Ok(InitExit::Success)
                }
                NodeStatus::NotInitialized => {
                    println!("{}", messages.check_not_initialized());
                    Ok(InitExit::NotInitialized)
                }
            }
        }
        Mode::Initialize(request) => match orchestrator.initialize(address, request).await {
            Ok(result) => {
                print_init_result(&result, request, messages);
                Ok(InitExit::Success)
            }
            Err(err) => {
                if let InitError::KeyCountMismatch { result, .. } = &err {
                    for line in render_key_material(result, messages) {
                        println!("{line}");
                    }
                    eprintln!("{}", messages.error_key_count_mismatch());
                }
                Err(err).with_context(|| messages.error_init_failed())
            }
        },
    }
}
