//! The sandboxed panel shell: the HTML document the host loads into its
//! webview surface. It echoes user input locally, shows a pending indicator,
//! disables the submit affordance while an exchange is in flight, and posts
//! `{kind: "submit", text}` to the host; rendered entries arrive back as
//! `{kind: "answer", html}`.

/// The complete shell document. Editor-theme CSS variables are used with
/// fallbacks so the document also renders outside an editor webview.
pub fn shell_html() -> String {
    SHELL.to_string()
}

const SHELL: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<style>
    body {
        padding: 0;
        margin: 0;
        background-color: var(--vscode-editor-background, #1e1e1e);
        color: var(--vscode-editor-foreground, #d4d4d4);
        font-family: var(--vscode-font-family, sans-serif);
        font-size: var(--vscode-font-size, 13px);
    }
    .chat-container {
        display: flex;
        flex-direction: column;
        height: 100vh;
        padding: 10px;
    }
    .messages {
        flex: 1;
        overflow-y: auto;
        margin-bottom: 10px;
        padding: 10px;
    }
    .message {
        margin: 8px 0;
        padding: 8px 12px;
        border-radius: 6px;
    }
    .user-message {
        background-color: var(--vscode-button-background, #0e639c);
        color: var(--vscode-button-foreground, #ffffff);
        align-self: flex-end;
        white-space: pre-wrap;
    }
    .ai-message {
        background-color: var(--vscode-input-background, #3c3c3c);
        color: var(--vscode-input-foreground, #cccccc);
        align-self: flex-start;
    }
    .pending-message {
        color: var(--vscode-descriptionForeground, #9d9d9d);
        font-style: italic;
    }
    .chat-error {
        color: var(--vscode-errorForeground, #f48771);
    }
    .code-block {
        margin: 8px 0;
        border-radius: 4px;
        background: var(--vscode-textCodeBlock-background, #2b2b2b);
    }
    .code-block-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 4px 8px;
        font-size: 11px;
        border-bottom: 1px solid var(--vscode-input-border, #454545);
    }
    .code-block pre {
        margin: 0;
        padding: 8px;
        overflow-x: auto;
    }
    .code-block code {
        font-family: var(--vscode-editor-font-family, monospace);
        font-size: 12px;
    }
    .copy-button {
        background: transparent;
        color: var(--vscode-button-foreground, #cccccc);
        border: 1px solid var(--vscode-input-border, #454545);
        border-radius: 3px;
        padding: 1px 8px;
        cursor: pointer;
        font-size: 11px;
    }
    .input-container {
        display: flex;
        flex-direction: column;
        gap: 8px;
        padding: 10px;
        border-top: 1px solid var(--vscode-input-border, #454545);
    }
    #messageInput {
        min-height: 80px;
        max-height: 200px;
        padding: 8px;
        background: var(--vscode-input-background, #3c3c3c);
        border: 1px solid var(--vscode-input-border, #454545);
        color: var(--vscode-input-foreground, #cccccc);
        resize: vertical;
        font-family: inherit;
        font-size: inherit;
        line-height: 1.4;
    }
    #sendButton {
        background: var(--vscode-button-background, #0e639c);
        color: var(--vscode-button-foreground, #ffffff);
        border: none;
        padding: 8px 12px;
        cursor: pointer;
        align-self: flex-end;
        min-width: 80px;
    }
    #sendButton:disabled {
        opacity: 0.5;
        cursor: default;
    }
</style>
</head>
<body>
<div class="chat-container">
    <div class="messages" id="messageContainer"></div>
    <div class="input-container">
        <textarea
            id="messageInput"
            placeholder="Type your message here... (Press Shift+Enter for new line, Enter to send)"
        ></textarea>
        <button id="sendButton">Send</button>
    </div>
</div>
<script>
    const host = typeof acquireVsCodeApi === 'function'
        ? acquireVsCodeApi()
        : { postMessage: (m) => window.parent.postMessage(m, '*') };
    const messageContainer = document.getElementById('messageContainer');
    const messageInput = document.getElementById('messageInput');
    const sendButton = document.getElementById('sendButton');
    let pendingEl = null;

    sendButton.addEventListener('click', sendMessage);

    messageInput.addEventListener('keydown', (e) => {
        if (e.key === 'Enter' && !e.shiftKey) {
            e.preventDefault();
            sendMessage();
        }
    });

    messageInput.addEventListener('input', function () {
        this.style.height = 'auto';
        this.style.height = Math.min(this.scrollHeight, 200) + 'px';
    });

    function sendMessage() {
        const text = messageInput.value.trim();
        if (!text || pendingEl) {
            return;
        }
        addUserMessage(text);
        beginPending();
        host.postMessage({ kind: 'submit', text: text });
        messageInput.value = '';
    }

    function addUserMessage(text) {
        const div = document.createElement('div');
        div.className = 'message user-message';
        div.textContent = text;
        appendEntry(div);
    }

    function beginPending() {
        sendButton.disabled = true;
        pendingEl = document.createElement('div');
        pendingEl.className = 'message ai-message pending-message';
        pendingEl.textContent = 'Thinking...';
        appendEntry(pendingEl);
    }

    function endPending() {
        if (pendingEl) {
            pendingEl.remove();
            pendingEl = null;
        }
        sendButton.disabled = false;
    }

    function addAnswer(html) {
        const div = document.createElement('div');
        div.className = 'message ai-message';
        div.innerHTML = html;
        appendEntry(div);
    }

    function appendEntry(el) {
        messageContainer.appendChild(el);
        messageContainer.scrollTop = messageContainer.scrollHeight;
    }

    messageContainer.addEventListener('click', (e) => {
        const button = e.target.closest('.copy-button');
        if (!button) {
            return;
        }
        const code = button.closest('.code-block').querySelector('code');
        navigator.clipboard.writeText(code.innerText).then(() => {
            button.textContent = 'Copied!';
            setTimeout(() => { button.textContent = 'Copy'; }, 1200);
        });
    });

    window.addEventListener('message', (event) => {
        const message = event.data;
        if (message && message.kind === 'answer') {
            endPending();
            addAnswer(message.html);
        }
    });
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_posts_submit_and_handles_answer() {
        let html = shell_html();
        assert!(html.contains("kind: 'submit'"));
        assert!(html.contains("message.kind === 'answer'"));
    }

    #[test]
    fn test_shell_has_pending_and_copy_affordances() {
        let html = shell_html();
        assert!(html.contains("sendButton.disabled = true"));
        assert!(html.contains("Thinking..."));
        assert!(html.contains("copy-button"));
        assert!(html.contains("Copied!"));
    }
}
