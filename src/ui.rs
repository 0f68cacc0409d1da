use crate::models::Category;

pub fn render_index(usage_threshold: f64) -> String {
    let options: String = Category::ALL
        .iter()
        .map(|category| format!("<option value=\"{category}\">{category}</option>"))
        .collect::<Vec<_>>()
        .join("\n          ");

    INDEX_HTML
        .replace("{{THRESHOLD}}", &usage_threshold.to_string())
        .replace("{{CATEGORY_OPTIONS}}", &options)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Electricity Consumption Dashboard</title>
  <style>
    :root {
      --bg: #f4f4f4;
      --ink: #2b2a28;
      --muted: #6f6a65;
      --card: #ffffff;
      --line: rgba(47, 72, 88, 0.12);
      --accent: #4bc0c0;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --shadow: 0 18px 40px rgba(47, 72, 88, 0.14);
    }

    body.dark-mode {
      --bg: #2b2b2b;
      --ink: #f4f4f4;
      --muted: #b8b2ab;
      --card: #3b3b3b;
      --line: rgba(244, 244, 244, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", Arial, sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
      transition: background-color 300ms ease, color 300ms ease;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      text-align: center;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    form {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
    }

    form input,
    form select {
      padding: 6px 8px;
      border: 1px solid var(--line);
      border-radius: 6px;
      background: var(--card);
      color: var(--ink);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    .alert {
      margin: 0;
      padding: 12px 16px;
      border-radius: 10px;
      background: rgba(198, 59, 43, 0.12);
      color: var(--danger);
      font-weight: 600;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    .chart-line {
      fill: rgba(75, 192, 192, 0.2);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-point {
      fill: var(--card);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    .summary p {
      margin: 0;
    }

    .footer {
      display: flex;
      justify-content: space-between;
      gap: 12px;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Electricity Consumption Dashboard</h1>

    <form id="usage-form">
      <label for="date">Date:</label>
      <input type="date" id="date" name="date" required />
      <label for="usage">Usage (kWh):</label>
      <input type="number" id="usage" name="usage" min="0" step="any" required />
      <label for="category">Category:</label>
      <select id="category" name="category">
          {{CATEGORY_OPTIONS}}
      </select>
      <button type="submit">Submit</button>
    </form>
    <div id="status" class="status"></div>

    <div id="alerts"></div>

    <svg id="chart" viewBox="0 0 640 280" preserveAspectRatio="none" role="img" aria-label="Electricity usage over time"></svg>

    <section class="summary">
      <p>Total Usage: <span id="total-usage">0</span> kWh</p>
      <p>Average Daily Usage: <span id="average-usage">0</span> kWh</p>
      <p>Alert threshold: <span id="threshold">{{THRESHOLD}}</span> kWh</p>
    </section>

    <div class="footer">
      <a href="/export" download="electricity_data.csv"><button type="button">Export Data</button></a>
      <button type="button" id="dark-toggle">Toggle Dark Mode</button>
    </div>
  </main>

  <script>
    const form = document.getElementById('usage-form');
    const statusEl = document.getElementById('status');
    const alertsEl = document.getElementById('alerts');
    const chart = document.getElementById('chart');

    const setStatus = (text, type) => {
      statusEl.textContent = text;
      statusEl.dataset.type = type;
    };

    const svg = (tag, attrs) => {
      const el = document.createElementNS('http://www.w3.org/2000/svg', tag);
      Object.entries(attrs).forEach(([key, value]) => el.setAttribute(key, value));
      return el;
    };

    const renderChart = (points) => {
      chart.innerHTML = '';
      if (points.length === 0) {
        return;
      }

      const width = 640;
      const height = 280;
      const pad = 36;
      const max = Math.max(...points.map((p) => p.usage), 1);
      const step = points.length > 1 ? (width - pad * 2) / (points.length - 1) : 0;
      const x = (i) => pad + i * step;
      const y = (v) => height - pad - (v / max) * (height - pad * 2);

      [0, 0.5, 1].forEach((frac) => {
        chart.appendChild(svg('line', { class: 'chart-grid', x1: pad, x2: width - pad, y1: y(max * frac), y2: y(max * frac) }));
        const label = svg('text', { class: 'chart-label', x: 4, y: y(max * frac) + 4 });
        label.textContent = (max * frac).toFixed(0);
        chart.appendChild(label);
      });

      const path = points.map((p, i) => `${i === 0 ? 'M' : 'L'}${x(i)},${y(p.usage)}`).join(' ');
      chart.appendChild(svg('path', { class: 'chart-line', d: `${path} L${x(points.length - 1)},${y(0)} L${x(0)},${y(0)} Z` }));

      points.forEach((p, i) => {
        const dot = svg('circle', { class: 'chart-point', cx: x(i), cy: y(p.usage), r: 4 });
        const title = svg('title', {});
        title.textContent = `${p.date}: ${p.usage} kWh`;
        dot.appendChild(title);
        chart.appendChild(dot);

        const label = svg('text', { class: 'chart-label', x: x(i) - 28, y: height - 10 });
        label.textContent = p.date;
        chart.appendChild(label);
      });
    };

    const renderSummary = (summary) => {
      document.getElementById('total-usage').textContent = summary.total;
      document.getElementById('average-usage').textContent = summary.average.toFixed(2);
      alertsEl.innerHTML = '';
      if (summary.alert.triggered) {
        const p = document.createElement('p');
        p.className = 'alert';
        p.textContent = summary.alert.message;
        alertsEl.appendChild(p);
      }
    };

    const refresh = async () => {
      const [dataRes, summaryRes] = await Promise.all([fetch('/data'), fetch('/summary')]);
      if (!dataRes.ok || !summaryRes.ok) {
        throw new Error('Unable to load usage data');
      }
      renderChart(await dataRes.json());
      renderSummary(await summaryRes.json());
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const res = await fetch('/submit', {
          method: 'POST',
          body: new URLSearchParams(new FormData(form))
        });
        const body = await res.json();
        if (body.status !== 'success') {
          throw new Error(body.message || 'Request failed');
        }
        form.reset();
        setStatus('', '');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('dark-toggle').addEventListener('click', () => {
      document.body.classList.toggle('dark-mode');
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_threshold_and_categories() {
        let html = render_index(120.5);
        assert!(html.contains("<span id=\"threshold\">120.5</span>"));
        assert!(html.contains("<option value=\"Appliances\">Appliances</option>"));
        assert!(!html.contains("{{"));
    }
}
