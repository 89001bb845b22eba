//! Embedded client assets for the console widget.
//!
//! The rendered fragment references `/css/glimpse.css` and `/js/glimpse.js`;
//! these constants hold their contents so a host (or the bundled asset
//! server) can serve them without a static file directory.

/// Stylesheet for the console widget.
pub const CONSOLE_CSS: &str = r#"/* glimpse console */

.glimpse-console {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    z-index: 99999;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    font-size: 13px;
    color: #eee;
    background: #1a1a2e;
    border-top: 1px solid #0f3460;
}

.glimpse-console-bar {
    display: flex;
    align-items: center;
    gap: 4px;
    padding: 6px 12px;
    background: #16213e;
    cursor: pointer;
}

.glimpse-console-title {
    font-weight: 600;
    color: #e94560;
    margin-right: 8px;
}

.glimpse-console-timer {
    margin-left: auto;
    font-family: 'SF Mono', 'Monaco', 'Inconsolata', monospace;
    font-size: 12px;
    color: #888;
}

.glimpse-console-tab {
    background: #0f3460;
    color: #eee;
    border: 1px solid #1a4a7a;
    padding: 4px 10px;
    border-radius: 4px;
    cursor: pointer;
    font-size: 12px;
}

.glimpse-console-tab.active {
    background: #e94560;
    border-color: #e94560;
}

.glimpse-console-counter {
    display: inline-block;
    min-width: 16px;
    margin-left: 6px;
    padding: 0 4px;
    border-radius: 8px;
    background: #1a1a2e;
    font-family: 'SF Mono', 'Monaco', 'Inconsolata', monospace;
    font-size: 11px;
    text-align: center;
}

.glimpse-console-body {
    display: none;
    max-height: 40vh;
    overflow-y: auto;
    padding: 10px 12px;
}

.glimpse-console-panel {
    display: none;
}

.glimpse-console-panel.active {
    display: block;
}

.glimpse-console table {
    width: 100%;
    border-collapse: collapse;
}

.glimpse-console td,
.glimpse-console th {
    padding: 4px 8px;
    text-align: left;
    vertical-align: top;
    border-bottom: 1px solid #0f3460;
    font-family: 'SF Mono', 'Monaco', 'Inconsolata', monospace;
    font-size: 12px;
}

.glimpse-console th {
    color: #888;
    text-transform: uppercase;
    font-size: 11px;
    letter-spacing: 0.5px;
}

.glimpse-console small {
    color: #888;
}

.glimpse-text-error {
    color: #ef4444;
}

.glimpse-text-warning {
    color: #f59e0b;
}

.glimpse-text-info {
    color: #4ade80;
}

.glimpse-text-muted {
    color: #666;
}

.glimpse-text-right {
    text-align: right;
    color: #888;
}
"#;

/// Console widget script. Expects jQuery and the options object produced by
/// the renderer: `{selector, timer, panels, speed}`.
pub const CONSOLE_JS: &str = r#"/* glimpse console widget */
(function (window) {
    'use strict';

    var glimpse = window.glimpse = window.glimpse || {};

    glimpse.Console = function ($, options) {
        var container = $(options.selector);
        if (!container.length) {
            return;
        }

        container.addClass('glimpse-console');

        var bar = $('<div class="glimpse-console-bar"></div>');
        var body = $('<div class="glimpse-console-body"></div>');

        bar.append('<span class="glimpse-console-title">glimpse</span>');

        $.each(options.panels, function (name, panel) {
            var tab = $('<button type="button" class="glimpse-console-tab"></button>')
                .attr('data-panel', name)
                .text(panel.label)
                .append($('<span class="glimpse-console-counter"></span>').text(panel.counter));

            var pane = $('<div class="glimpse-console-panel"></div>')
                .attr('data-panel', name)
                .html(panel.content);

            bar.append(tab);
            body.append(pane);
        });

        bar.append($('<span class="glimpse-console-timer"></span>').text(options.timer + 's'));

        bar.on('click', '.glimpse-console-tab', function (event) {
            event.stopPropagation();
            var name = $(this).attr('data-panel');
            var tab = $(this);
            var pane = body.find('.glimpse-console-panel[data-panel="' + name + '"]');

            if (tab.hasClass('active')) {
                tab.removeClass('active');
                pane.removeClass('active');
                body.slideUp(options.speed);
                return;
            }

            bar.find('.glimpse-console-tab').removeClass('active');
            body.find('.glimpse-console-panel').removeClass('active');
            tab.addClass('active');
            pane.addClass('active');
            body.slideDown(options.speed);
        });

        container.append(bar).append(body);
    };
})(window);
"#;
