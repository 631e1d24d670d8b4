use std::io::Write;
use std::process::{Command, Stdio};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::OnceCell;

use crate::checkout::{CheckoutRequest, Gateway};
use crate::constants::CHECKOUT_SCRIPT_URL;
use crate::error::{IdeatexError, IdeatexResult};
use crate::logging::{log_debug, log_error};

/// Razorpay's hosted checkout, driven from the terminal: the checkout page is
/// rendered to a temp HTML file and opened in the default browser. The page
/// shows the proof triple after payment; the user copies it back into the
/// client.
pub struct HostedCheckout {
    http: reqwest::Client,
    loaded: OnceCell<bool>,
}

impl HostedCheckout {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            loaded: OnceCell::new(),
        }
    }
}

impl Default for HostedCheckout {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Gateway for HostedCheckout {
    /// Fetch the checkout script once per process. The outcome is cached, so
    /// repeat attempts neither re-download nor flip a failed load to ready.
    async fn ensure_ready(&self) -> IdeatexResult<()> {
        let ok = self
            .loaded
            .get_or_init(|| async {
                match self.http.get(CHECKOUT_SCRIPT_URL).send().await {
                    Ok(resp) => resp.status().is_success(),
                    Err(e) => {
                        log_error(&format!("Checkout script load failed: {}", e));
                        false
                    }
                }
            })
            .await;

        if *ok {
            Ok(())
        } else {
            Err(IdeatexError::GatewayUnavailable)
        }
    }

    async fn open(&self, request: &CheckoutRequest) -> IdeatexResult<()> {
        let page = render_checkout_page(request);

        let mut file = tempfile::Builder::new()
            .prefix("ideatex-checkout-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(page.as_bytes())?;

        // The browser outlives this call; the page must too.
        let (_, path) = file
            .keep()
            .map_err(|e| IdeatexError::Unknown(format!("Failed to keep checkout page: {}", e)))?;

        log_debug(&format!("Opening checkout page: {}", path.display()));
        open_in_browser(path.to_string_lossy().as_ref())?;
        Ok(())
    }
}

fn open_in_browser(target: &str) -> IdeatexResult<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    Command::new(opener)
        .arg(target)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| IdeatexError::Unknown(format!("Failed to open browser: {}", e)))?;
    Ok(())
}

fn render_checkout_page(request: &CheckoutRequest) -> String {
    let options = json!({
        "key": request.key,
        "amount": request.amount,
        "currency": request.currency,
        "name": request.display_name,
        "description": request.description,
        "order_id": request.order_id,
        "prefill": {
            "name": request.prefill.name,
            "email": request.prefill.email,
            "contact": request.prefill.contact,
        },
        "theme": { "color": request.theme_color },
    });

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{script}"></script>
</head>
<body style="font-family: sans-serif; background: #1a1a1a; color: #eee; padding: 2rem;">
  <h2>{title}</h2>
  <p>{description}</p>
  <pre id="proof" style="background:#2a2a2a;padding:1rem;border-radius:8px;"></pre>
  <script>
    var options = {options};
    options.handler = function (response) {{
      document.getElementById("proof").textContent =
        "payment id:  " + response.razorpay_payment_id + "\n" +
        "order id:    " + response.razorpay_order_id + "\n" +
        "signature:   " + response.razorpay_signature + "\n\n" +
        "Copy these three values back into the terminal.";
    }};
    new Razorpay(options).open();
  </script>
</body>
</html>
"#,
        title = request.display_name,
        description = request.description,
        script = CHECKOUT_SCRIPT_URL,
        options = options,
    )
}
