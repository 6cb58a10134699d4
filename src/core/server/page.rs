use crate::core::layout::DashboardLayout;
use crate::types::{ControlId, OutputId};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the dashboard page. Widget ids match the control and output ids
/// used by the event API.
pub fn render_page(layout: &DashboardLayout) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{plotly}"></script>
</head>
<body>
    <h1>{title}</h1>
    <div class="control">
        <select id="{site}" aria-label="Select a launch site here"></select>
    </div>
    <div id="{pie}" class="chart"></div>
    <p>Payload range (Kg): <span id="payload-label"></span></p>
    <div class="control range" id="{slider}">
        <input type="range" id="payload-lo" list="payload-marks">
        <input type="range" id="payload-hi" list="payload-marks">
        <datalist id="payload-marks"></datalist>
    </div>
    <div id="{scatter}" class="chart"></div>
    <script>{js}</script>
</body>
</html>"#,
        title = escape_html(&layout.title),
        css = inline_css(),
        plotly = PLOTLY_CDN,
        site = ControlId::SiteDropdown,
        slider = ControlId::PayloadSlider,
        pie = OutputId::SuccessPieChart,
        scatter = OutputId::SuccessPayloadScatterChart,
        js = inline_javascript(),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn inline_css() -> &'static str {
    r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; }
h1 { text-align: center; color: #503D36; font-size: 40px; }
.control { margin: 16px 0; }
.control select { width: 100%; padding: 6px; }
.range { display: flex; gap: 12px; }
.range input { flex: 1; }
.chart { min-height: 420px; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(async function () {
    const site = document.getElementById('site-dropdown');
    const lo = document.getElementById('payload-lo');
    const hi = document.getElementById('payload-hi');
    const label = document.getElementById('payload-label');

    const layout = await (await fetch('/api/layout')).json();
    const state = await (await fetch('/api/state')).json();

    for (const option of layout.site_options) {
        const el = document.createElement('option');
        el.value = option.value;
        el.textContent = option.label;
        site.appendChild(el);
    }
    site.value = state.site;

    const marks = document.getElementById('payload-marks');
    for (const mark of layout.slider.marks) {
        const el = document.createElement('option');
        el.value = mark.value;
        el.label = mark.label;
        marks.appendChild(el);
    }
    for (const input of [lo, hi]) {
        input.min = layout.slider.min;
        input.max = layout.slider.max;
        input.step = layout.slider.step;
    }
    // Range inputs snap to min + k*step; the label shows the selection itself.
    const formatRange = (range) => `${range[0]} - ${range[1]}`;
    lo.value = state.payload_range[0];
    hi.value = state.payload_range[1];
    label.textContent = formatRange(state.payload_range);

    function drawPie(id, series) {
        Plotly.react(id, [{
            type: 'pie',
            labels: series.segments.map(s => String(s.name)),
            values: series.segments.map(s => s.count),
        }], { title: series.title });
    }

    function drawScatter(id, series) {
        const traces = new Map();
        for (const p of series.points) {
            const key = p.booster_version_category;
            if (!traces.has(key)) {
                traces.set(key, { type: 'scatter', mode: 'markers', name: key, x: [], y: [] });
            }
            traces.get(key).x.push(p.payload_mass_kg);
            traces.get(key).y.push(p.outcome);
        }
        Plotly.react(id, [...traces.values()], {
            title: series.title,
            xaxis: { title: 'Payload Mass (kg)' },
            yaxis: { title: 'class' },
        });
    }

    function apply(updates) {
        for (const update of updates) {
            if (update.figure.kind === 'pie') {
                drawPie(update.output, update.figure.data);
            } else {
                drawScatter(update.output, update.figure.data);
            }
        }
    }

    async function send(event) {
        const response = await fetch('/api/events', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(event),
        });
        const body = await response.json();
        apply(body.updates);
    }

    site.addEventListener('change', () => send({ control: 'site-dropdown', value: site.value }));
    for (const input of [lo, hi]) {
        input.addEventListener('change', () => {
            const range = [Number(lo.value), Number(hi.value)];
            label.textContent = formatRange(range);
            send({ control: 'payload-slider', value: range });
        });
    }

    apply(await (await fetch('/api/charts')).json());
})();
"#
}
