//! Page scripts injected into the Gemini webviews.
//!
//! The interceptor script decides link clicks and the Ctrl+N remap inside
//! the page, where suppression has to happen synchronously. Every constant,
//! suppression call and synthetic event it uses is rendered from the types
//! in `crate::interceptor` so the host side agrees with it.

use serde::Serialize;

use crate::interceptor::bridge::{GET_SETTINGS_COMMAND, OPEN_URL_COMMAND};
use crate::interceptor::keys::{new_chat_dispatch, REMAP_SUPPRESSION, REMAP_TRIGGER_KEY};
use crate::interceptor::links::{
    LinkTrigger, BLANK_TARGET, SHARE_PATH_PREFIX, SHARE_QUERY_KEY, WEB_SCHEMES,
};

const LOG_PREFIX: &str = "[Gemini Desktop]";

/// Serialize a value as a JavaScript literal.
fn js<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain strings, arrays and structs of primitives cannot fail to serialize
    serde_json::to_string(value).unwrap_or_else(|_| "null".into())
}

/// `document.dispatchEvent(...)` statements for the Ctrl+Shift+O replay.
fn render_new_chat_dispatch() -> String {
    new_chat_dispatch()
        .iter()
        .map(|key| {
            format!(
                "document.dispatchEvent(new KeyboardEvent({}, {}));",
                js(key.kind.dom_name()),
                js(&key.init)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

fn render_link_listener(trigger: LinkTrigger) -> String {
    format!(
        r#"document.addEventListener({event}, function (e) {{
        const anchor = closestAnchor(e.target);
        if (!anchor) return;
        if (shouldOpenExternal(anchor.href, anchor.getAttribute('target'))) {{
            {suppress}
            openInBrowser(anchor.href);
        }}
    }}, true);"#,
        event = js(trigger.dom_name()),
        suppress = trigger.suppression().to_js("e"),
    )
}

/// Render the interceptor script installed on every page load.
///
/// The Ctrl+N handler only suppresses the original event after
/// `get_settings` resolves, so a failed or disabled lookup leaves the key
/// press untouched.
pub fn render_interceptor_script() -> String {
    format!(
        r#"(function () {{
    if (window.__GEMINI_DESKTOP_INTERCEPTOR__) return;
    window.__GEMINI_DESKTOP_INTERCEPTOR__ = true;

    const LOG = {log};
    const WEB_SCHEMES = {web_schemes};
    const SHARE_PATH_PREFIX = {share_prefix};
    const SHARE_QUERY_KEY = {share_key};
    const BLANK_TARGET = {blank_target};
    const REMAP_KEY = {remap_key};

    function invoke(cmd, args) {{
        return window.__TAURI__.core.invoke(cmd, args);
    }}

    function isWebUrl(href) {{
        return WEB_SCHEMES.some(function (scheme) {{ return href.startsWith(scheme); }});
    }}

    document.addEventListener('keydown', async function (e) {{
        if (!(e.ctrlKey || e.metaKey) || !e.key || e.key.toLowerCase() !== REMAP_KEY) return;
        try {{
            const settings = await invoke({get_settings});
            if (!settings || !settings.enable_ctrl_n) return;
            {remap_suppress}
            console.log(LOG, 'Ctrl+N detected: simulating Ctrl+Shift+O for new chat');
            {new_chat_dispatch}
        }} catch (err) {{
            console.error(LOG, 'Error fetching settings in shortcut handler:', err);
        }}
    }}, true);

    async function openInBrowser(url) {{
        try {{
            console.log(LOG, 'Opening in system browser:', url);
            await invoke({open_url}, {{ url: url }});
        }} catch (err) {{
            console.error(LOG, 'Failed to open link:', err);
        }}
    }}

    function shouldOpenExternal(href, target) {{
        if (!href || href.startsWith('javascript:')) return false;
        if (!isWebUrl(href)) return false;
        try {{
            const url = new URL(href);
            if (url.hostname !== '' && url.hostname !== window.location.hostname) return true;
            if (target === BLANK_TARGET) return true;
            if (url.pathname.startsWith(SHARE_PATH_PREFIX) || url.searchParams.has(SHARE_QUERY_KEY)) return true;
        }} catch (err) {{}}
        return false;
    }}

    const originalOpen = window.open;
    window.open = function (url, target, features) {{
        if (typeof url === 'string' && isWebUrl(url)) {{
            openInBrowser(url);
            return null;
        }}
        return originalOpen ? originalOpen.call(this, url, target, features) : null;
    }};

    // HTML anchors only: SVG <a> reports a lowercase tagName and its href is
    // not a string.
    function closestAnchor(node) {{
        while (node && node.tagName !== 'A') {{
            node = node.parentElement;
        }}
        return node && node.href ? node : null;
    }}

    {click_listener}

    {auxclick_listener}

    console.log(LOG, 'Init script loaded: shortcuts + link opener');
}})();"#,
        log = js(LOG_PREFIX),
        web_schemes = js(&WEB_SCHEMES),
        share_prefix = js(SHARE_PATH_PREFIX),
        share_key = js(SHARE_QUERY_KEY),
        blank_target = js(BLANK_TARGET),
        remap_key = js(REMAP_TRIGGER_KEY),
        get_settings = js(GET_SETTINGS_COMMAND),
        open_url = js(OPEN_URL_COMMAND),
        remap_suppress = REMAP_SUPPRESSION.to_js("e"),
        new_chat_dispatch = render_new_chat_dispatch(),
        click_listener = render_link_listener(LinkTrigger::Click),
        auxclick_listener = render_link_listener(LinkTrigger::AuxClick),
    )
}

/// Sidebar link to the most recent conversation, then a class-based fallback.
const CONVERSATION_SELECTORS: [&str; 2] = [
    r#"conversations-list a[data-test-id="conversation"]"#,
    "conversations-list .conversation-items-container a.conversation",
];
const CONVERSATION_ATTEMPTS: u32 = 10;
const CONVERSATION_RETRY_MS: u32 = 500;
const CONVERSATION_START_DELAY_MS: u32 = 200;

/// Script that opens the newest conversation once the sidebar has rendered.
///
/// Runs after a window is shown, so the first try waits for the slide or
/// focus transition to settle.
pub fn render_latest_conversation_script() -> String {
    format!(
        r#"(function () {{
    const LOG = {log};
    const SELECTORS = {selectors};

    function tryClick(attempts) {{
        try {{
            for (const selector of SELECTORS) {{
                const link = document.querySelector(selector);
                if (link) {{
                    link.click();
                    console.log(LOG, 'Opened latest conversation:', link.href);
                    return;
                }}
            }}
            if (attempts > 0) {{
                setTimeout(function () {{ tryClick(attempts - 1); }}, {retry_ms});
            }} else {{
                console.warn(LOG, 'No conversation link found');
            }}
        }} catch (err) {{
            console.error(LOG, 'Latest conversation lookup failed:', err);
        }}
    }}

    setTimeout(function () {{ tryClick({attempts}); }}, {start_ms});
}})();"#,
        log = js(LOG_PREFIX),
        selectors = js(&CONVERSATION_SELECTORS),
        retry_ms = CONVERSATION_RETRY_MS,
        attempts = CONVERSATION_ATTEMPTS,
        start_ms = CONVERSATION_START_DELAY_MS,
    )
}
