use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{header, HeaderName, StatusCode};
use shared::display::LauncherOptions;
use shared::embed::EmbedMessage;
use tracing::error;

use crate::AppState;

type ScriptResponse = (StatusCode, [(HeaderName, &'static str); 2], String);

const CONFIG_PLACEHOLDER: &str = "__SPIN_WHEEL_CONFIG__";
const SRC_BASE_PLACEHOLDER: &str = "__SPIN_WHEEL_SRC_BASE__";
const CLOSE_TYPE_PLACEHOLDER: &str = "__SPIN_WHEEL_CLOSE_TYPE__";

const LAUNCHER_TEMPLATE: &str = r#"(function() {
  const config = __SPIN_WHEEL_CONFIG__;
  const zIndex = 999999;
  const right = config.position.indexOf('right') !== -1;
  const bottom = config.position.indexOf('bottom') !== -1;

  const button = document.createElement('button');
  button.id = 'spin-wheel-float-btn';
  button.textContent = config.buttonText;
  button.style.cssText = [
    'position: fixed',
    right ? 'right: 20px' : 'left: 20px',
    bottom ? 'bottom: 20px' : 'top: 20px',
    'z-index: ' + zIndex,
    'width: 60px',
    'height: 60px',
    'border-radius: 50%',
    'background: linear-gradient(135deg, ' + config.buttonColor + ', #FF8E53)',
    'color: white',
    'border: none',
    'cursor: pointer',
    'box-shadow: 0 4px 20px rgba(0,0,0,0.3)',
    'font-size: 24px',
    'display: flex',
    'align-items: center',
    'justify-content: center',
    'transition: all 0.3s ease'
  ].join(';');
  button.onmouseover = function() {
    button.style.transform = 'scale(1.1)';
    button.style.boxShadow = '0 6px 25px rgba(0,0,0,0.4)';
  };
  button.onmouseout = function() {
    button.style.transform = 'scale(1)';
    button.style.boxShadow = '0 4px 20px rgba(0,0,0,0.3)';
  };

  const container = document.createElement('div');
  container.id = 'spin-wheel-widget';
  container.style.cssText = [
    'position: fixed',
    right ? 'right: 20px' : 'left: 20px',
    bottom ? 'bottom: 90px' : 'top: 90px',
    'z-index: ' + zIndex,
    'width: ' + config.widgetWidth,
    'height: ' + config.widgetHeight,
    'border-radius: 20px',
    'overflow: hidden',
    'box-shadow: 0 10px 40px rgba(0,0,0,0.2)',
    'display: none',
    'border: 3px solid white',
    'background: white'
  ].join(';');

  const iframe = document.createElement('iframe');
  iframe.id = 'spin-wheel-iframe';
  iframe.src = config.widgetUrl;
  iframe.allow = 'clipboard-write';
  iframe.style.cssText = 'width: 100%; height: 100%; border: none; margin: 0; padding: 0;';

  const closeBtn = document.createElement('button');
  closeBtn.textContent = '×';
  closeBtn.setAttribute('aria-label', 'Close spin wheel');
  closeBtn.style.cssText = [
    'position: absolute',
    'top: 10px',
    'right: 10px',
    'width: 30px',
    'height: 30px',
    'border-radius: 50%',
    'background: rgba(255,255,255,0.9)',
    'border: 2px solid #ddd',
    'color: #333',
    'font-size: 20px',
    'font-weight: bold',
    'cursor: pointer',
    'z-index: 100',
    'display: flex',
    'align-items: center',
    'justify-content: center',
    'transition: all 0.2s'
  ].join(';');

  function hideWidget() {
    container.style.display = 'none';
    button.style.display = 'flex';
  }

  function showWidget() {
    container.style.display = 'block';
    button.style.display = 'none';
    iframe.src = config.widgetUrl;
  }

  closeBtn.onclick = hideWidget;
  button.onclick = function() {
    if (container.style.display === 'block') {
      hideWidget();
    } else {
      showWidget();
    }
  };

  document.addEventListener('click', function(e) {
    if (container.style.display === 'block' &&
        !container.contains(e.target) &&
        !button.contains(e.target)) {
      hideWidget();
    }
  });

  window.addEventListener('message', function(e) {
    if (e.source === iframe.contentWindow && e.data && e.data.type === __SPIN_WHEEL_CLOSE_TYPE__) {
      hideWidget();
    }
  });

  container.appendChild(closeBtn);
  container.appendChild(iframe);
  document.body.appendChild(button);
  document.body.appendChild(container);

  if (typeof config.autoOpenMs === 'number') {
    setTimeout(function() {
      if (container.style.display !== 'block') {
        showWidget();
      }
    }, config.autoOpenMs);
  }
})();
"#;

const CUSTOM_ELEMENT_TEMPLATE: &str = r#"class SpinWheelEmbed extends HTMLElement {
  static get observedAttributes() {
    return ['delay', 'prizes', 'compact', 'src-base'];
  }

  constructor() {
    super();
    this.attachShadow({ mode: 'open' });
    this.shown = false;
    this.onMessage = (e) => {
      if (e.data && e.data.type === __SPIN_WHEEL_CLOSE_TYPE__) {
        this.closeWheel(false);
      }
    };
  }

  connectedCallback() {
    this.render();
    window.addEventListener('message', this.onMessage);
    this.timer = setTimeout(() => this.openWheel(), this.getConfig().delay);
  }

  disconnectedCallback() {
    window.removeEventListener('message', this.onMessage);
    clearTimeout(this.timer);
  }

  attributeChangedCallback(name, oldValue, newValue) {
    if (oldValue !== newValue && this.shadowRoot.innerHTML) {
      this.render();
    }
  }

  getConfig() {
    const base = this.getAttribute('src-base') || __SPIN_WHEEL_SRC_BASE__;
    const delay = parseInt(this.getAttribute('delay') || '5000', 10);
    return {
      delay: isNaN(delay) ? 5000 : delay,
      compact: this.getAttribute('compact') !== 'false',
      prizes: this.getAttribute('prizes') || '',
      srcBase: base.endsWith('/') ? base.slice(0, -1) : base
    };
  }

  render() {
    const config = this.getConfig();
    const params = new URLSearchParams({ embedded: 'true', compact: String(config.compact) });
    if (config.prizes) {
      try {
        JSON.parse(config.prizes);
        params.set('prizes', config.prizes);
      } catch (err) {
        console.warn('Invalid prizes JSON, using default', err);
      }
    }

    this.shadowRoot.innerHTML = `
      <style>
        :host { position: fixed; inset: 0; z-index: 2147483647; pointer-events: none; }
        .overlay {
          position: fixed; inset: 0; background: rgba(0, 0, 0, 0.65);
          backdrop-filter: blur(4px); opacity: 0; transition: opacity 0.4s ease; pointer-events: none;
        }
        .overlay.visible { opacity: 1; pointer-events: auto; }
        .modal-container {
          position: fixed; inset: 0; display: flex; align-items: center; justify-content: center;
          padding: 16px; pointer-events: none; opacity: 0; transition: opacity 0.4s ease;
        }
        .modal-container.visible { opacity: 1; }
        .content-wrapper { position: relative; width: 100%; max-width: 640px; pointer-events: none; }
        .modal-container.visible .content-wrapper { pointer-events: auto; }
        iframe {
          width: 100%; height: min(780px, 88vh); border: none; border-radius: 16px;
          box-shadow: 0 25px 80px -15px rgba(0,0,0,0.6); background: white;
        }
        .close-btn {
          position: absolute; top: -16px; right: -16px; width: 40px; height: 40px;
          background: white; color: #1f2937; border-radius: 50%; display: flex;
          align-items: center; justify-content: center; font-size: 24px; font-weight: bold;
          cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.25); transition: all 0.2s;
          z-index: 10; border: 2px solid #e5e7eb;
        }
        .close-btn:hover { transform: scale(1.1); box-shadow: 0 6px 16px rgba(0,0,0,0.3); }
      </style>
      <div class="overlay" id="overlay"></div>
      <div class="modal-container" id="modalContainer">
        <div class="content-wrapper">
          <button class="close-btn" id="closeBtn" aria-label="Close spin wheel">×</button>
          <iframe id="spin-iframe" allow="clipboard-write"></iframe>
        </div>
      </div>
    `;

    this.overlay = this.shadowRoot.querySelector('#overlay');
    this.modalContainer = this.shadowRoot.querySelector('#modalContainer');
    this.shadowRoot.querySelector('#spin-iframe').src = config.srcBase + '/embed/spin-wheel?' + params.toString();
    this.shadowRoot.querySelector('#closeBtn').addEventListener('click', () => this.closeWheel(true));
    if (this.shown) {
      this.openWheel();
    }
  }

  openWheel() {
    this.shown = true;
    this.overlay.classList.add('visible');
    this.modalContainer.classList.add('visible');
  }

  closeWheel(notify) {
    this.overlay.classList.remove('visible');
    this.modalContainer.classList.remove('visible');
    if (notify) {
      setTimeout(() => {
        window.parent.postMessage({ type: __SPIN_WHEEL_CLOSE_TYPE__ }, '*');
      }, 450);
    }
  }
}

if (!customElements.get('spin-wheel-embed')) {
  customElements.define('spin-wheel-embed', SpinWheelEmbed);
}
"#;

fn javascript(body: String) -> ScriptResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
}

fn script_error() -> ScriptResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        "console.error('Spin wheel loader unavailable');".to_string(),
    )
}

/// JSON string literal of the close message type, safe to splice into a script.
fn close_type_literal() -> Result<String, serde_json::Error> {
    let message = serde_json::to_value(EmbedMessage::Close)?;
    serde_json::to_string(&message["type"])
}

/// Renders the floating launcher for the given query options.
pub fn render_launcher(options: &LauncherOptions) -> Result<String, serde_json::Error> {
    Ok(LAUNCHER_TEMPLATE
        .replace(CONFIG_PLACEHOLDER, &serde_json::to_string(options)?)
        .replace(CLOSE_TYPE_PLACEHOLDER, &close_type_literal()?))
}

/// Renders the `<spin-wheel-embed>` element definition; `src-base` defaults to `public_base_url`.
pub fn render_custom_element(public_base_url: &str) -> Result<String, serde_json::Error> {
    Ok(CUSTOM_ELEMENT_TEMPLATE
        .replace(SRC_BASE_PLACEHOLDER, &serde_json::to_string(public_base_url)?)
        .replace(CLOSE_TYPE_PLACEHOLDER, &close_type_literal()?))
}

pub async fn launcher_script(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ScriptResponse {
    let options = LauncherOptions::new(format!("{}/embed", state.config.public_base_url)).with_params(&params);

    match render_launcher(&options) {
        Ok(script) => javascript(script),
        Err(e) => {
            error!("Failed to render launcher script: {}", e);
            script_error()
        }
    }
}

pub async fn custom_element_script(State(state): State<AppState>) -> ScriptResponse {
    match render_custom_element(&state.config.public_base_url) {
        Ok(script) => javascript(script),
        Err(e) => {
            error!("Failed to render custom element script: {}", e);
            script_error()
        }
    }
}
