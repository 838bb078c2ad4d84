//! Static HTML for the `HtmlFormatter`: document head with styles, and the
//! footer with the table-sorting script.

/// Document start, styles, and the opening of the page container.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Applicant Insights Report</title>
    <style>
        :root {
            --color-ok: #22c55e;
            --color-empty: #eab308;
            --color-misconfigured: #ef4444;
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-chart-primary: #2F76B9;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.25rem; }
        h2 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; }
        .range { color: var(--color-text-muted); margin-bottom: 1.5rem; }
        .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .summary-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; }
        .summary-card .value { font-size: 2rem; font-weight: 700; display: block; }
        .summary-card .label { font-size: 0.875rem; color: var(--color-text-muted); margin-top: 0.25rem; }
        .summary-card.ok .value { color: var(--color-ok); }
        .summary-card.empty .value { color: var(--color-empty); }
        .summary-card.misconfigured .value { color: var(--color-misconfigured); }
        .section { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1.5rem; }
        .section .meta { font-size: 0.875rem; color: var(--color-text-muted); margin-bottom: 1rem; }
        .chart-container svg { width: 100%; height: auto; max-width: 760px; }
        .chart-container svg rect, .chart-container svg path { transition: opacity 0.15s ease; }
        .chart-container svg rect:hover, .chart-container svg path:hover { opacity: 0.85; }
        .notice { padding: 1rem; border-radius: 0.375rem; font-size: 0.875rem; }
        .notice.empty { background: #fef9c3; color: #854d0e; }
        .notice.misconfigured { background: #fee2e2; color: #991b1b; }
        .table-container { overflow-x: auto; margin-top: 1rem; }
        table { width: 100%; border-collapse: collapse; border: 1px solid var(--color-border); }
        th, td { padding: 0.5rem 1rem; text-align: left; border-bottom: 1px solid var(--color-border); }
        th { background: var(--color-bg); font-weight: 600; font-size: 0.75rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        th.sortable { cursor: pointer; user-select: none; }
        th.sortable.asc::after { content: ' \25B2'; }
        th.sortable.desc::after { content: ' \25BC'; }
        td { font-size: 0.875rem; }
        td.number { text-align: right; font-variant-numeric: tabular-nums; }
        tr:last-child td { border-bottom: none; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .section, table { border: 1px solid #333; }
            .notice { background: transparent !important; border: 1px solid currentColor; }
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Applicant Insights Report</h1>
"#;

/// Page footer and sortable-column script.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>applicant-insights</strong>
        </div>
    </div>
    <script>
        (function() {
            document.querySelectorAll('th.sortable').forEach(header => {
                header.addEventListener('click', () => {
                    const table = header.closest('table');
                    const tbody = table.querySelector('tbody');
                    const rows = Array.from(tbody.querySelectorAll('tr'));
                    const colIndex = Array.from(header.parentNode.children).indexOf(header);
                    const isAsc = header.classList.contains('asc');

                    table.querySelectorAll('th.sortable').forEach(th => th.classList.remove('asc', 'desc'));
                    header.classList.add(isAsc ? 'desc' : 'asc');

                    const numeric = header.dataset.sort === 'number';
                    rows.sort((a, b) => {
                        const cellA = a.children[colIndex];
                        const cellB = b.children[colIndex];
                        const aVal = numeric ? parseFloat(cellA.dataset.value) || 0 : cellA.textContent.trim().toLowerCase();
                        const bVal = numeric ? parseFloat(cellB.dataset.value) || 0 : cellB.textContent.trim().toLowerCase();
                        if (aVal < bVal) return isAsc ? 1 : -1;
                        if (aVal > bVal) return isAsc ? -1 : 1;
                        return 0;
                    });
                    rows.forEach(row => tbody.appendChild(row));
                });
            });
        })();
    </script>
</body>
</html>
"#;
