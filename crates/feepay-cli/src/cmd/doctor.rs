use anyhow::Result;
use feepay_client::CLIENT_VERSION;
use serde::Serialize;
use solana_sdk::signature::Signer;

use crate::args::Cli;
use crate::output;
use crate::solana;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub client_version: &'static str,
    pub checks: Vec<Check>,
}

pub async fn run(cli: &Cli) -> Result<()> {
    let mut checks = Vec::new();

    checks.push(match solana::client::program_id(cli) {
        Ok(id) => check("program_id", true, id.to_string()),
        Err(e) => check("program_id", false, e.to_string()),
    });

    match solana::client::provider_config(cli) {
        Ok(cfg) => {
            checks.push(check("provider", true, format!("{} ({})", cfg.url, cfg.commitment)));
            checks.push(match cfg.load_keypair() {
                Ok(kp) => check("wallet", true, kp.pubkey().to_string()),
                Err(e) => check("wallet", false, e.to_string()),
            });
        }
        Err(e) => checks.push(check("provider", false, e.to_string())),
    }

    // Solana tooling is optional but handy for airdrops and deploys.
    checks.push(check(
        "solana",
        which_ok("solana"),
        "optional (solana CLI on PATH)".to_string(),
    ));

    let ok = checks.iter().all(|c| c.ok || c.name == "solana");
    let out = DoctorOut { ok, client_version: CLIENT_VERSION, checks };
    output::report(&out, |w| {
        for c in &out.checks {
            let mark = if c.ok { "ok" } else { "FAIL" };
            output::field(w, &format!("[{mark}] {}", c.name), &c.detail)?;
        }
        output::field(w, "overall", if out.ok { "ok" } else { "problems found" })
    })
}

fn check(name: &str, ok: bool, detail: String) -> Check {
    Check { name: name.to_string(), ok, detail }
}

fn which_ok(cmd: &str) -> bool {
    std::env::var_os("PATH").and_then(|paths| {
        for p in std::env::split_paths(&paths) {
            let full = p.join(cmd);
            if full.exists() {
                return Some(());
            }
            #[cfg(windows)]
            {
                let full_exe = p.join(format!("{cmd}.exe"));
                if full_exe.exists() {
                    return Some(());
                }
            }
        }
        None
    }).is_some()
}
