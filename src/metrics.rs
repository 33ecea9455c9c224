//! The seven metric series recognized in benchmark log lines.
//!
//! Each series is keyed by a fixed English label substring. A log line
//! `label : value` belongs to the first series whose label substring the
//! line's label contains; everything needed to file and plot the series
//! (output suffix, header quantity, graph title, axis label) lives in the
//! same table entry.

/// Quantity recorded in a series, named in the data file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Bandwidth,
    CpuPercent,
}

impl Quantity {
    pub fn header_name(self) -> &'static str {
        match self {
            Quantity::Bandwidth => "bandwidth",
            Quantity::CpuPercent => "cpu_percent",
        }
    }
}

/// One recognized metric series.
#[derive(Debug)]
pub struct Metric {
    /// Substring matched against the label half of a `label : value` line.
    pub label: &'static str,
    /// Suffix appended to the output basename for this series' data file.
    pub suffix: &'static str,
    /// Quantity named in the data file header.
    pub quantity: Quantity,
    /// Title prefix for the rendered graph.
    pub plot_title: &'static str,
    /// Y-axis label handed to the plot template.
    pub axis_label: &'static str,
    /// If set, the value half must contain this substring for a row to count.
    pub value_filter: Option<&'static str>,
}

/// Routing table, in matching priority order. First label match wins.
pub const METRICS: [Metric; 7] = [
    Metric {
        label: "Cumulated bandwidth",
        suffix: ".cumulated",
        quantity: Quantity::Bandwidth,
        plot_title: "Cumulated Bandwidth",
        axis_label: "Bandwidth in Mbits/sec",
        value_filter: None,
    },
    Metric {
        label: "Average bandwidth / host",
        suffix: ".average_bp_host",
        quantity: Quantity::Bandwidth,
        plot_title: "Average Bandwidth per Host",
        axis_label: "Bandwidth in Mbits/sec",
        value_filter: None,
    },
    Metric {
        label: "Average bandwidth / stream",
        suffix: ".average_bp_stream",
        quantity: Quantity::Bandwidth,
        plot_title: "Average Bandwidth per Stream",
        axis_label: "Bandwidth in Mbits/sec",
        value_filter: None,
    },
    Metric {
        label: "Average cpu load / host",
        suffix: ".average_cpu_host",
        quantity: Quantity::CpuPercent,
        plot_title: "Average CPU per Host",
        axis_label: "CPU %",
        value_filter: None,
    },
    Metric {
        label: "Average network bandwidth / %cpu",
        suffix: ".average_network_per_cpu_percent",
        quantity: Quantity::Bandwidth,
        plot_title: "Average Network Bandwidth per CPU %",
        axis_label: "Mbits/CPU %",
        value_filter: None,
    },
    Metric {
        // Matches both "host" and "hosts" phrasings.
        label: "Standard deviation between host",
        suffix: ".stddev_bp_between_hosts",
        quantity: Quantity::Bandwidth,
        plot_title: "Standard Deviation of Bandwidth Between Hosts",
        axis_label: "Bandwidth in Mbits/sec",
        value_filter: Some("Mbps"),
    },
    Metric {
        label: "Standard deviation between streams",
        suffix: ".stddev_between_streams",
        quantity: Quantity::Bandwidth,
        plot_title: "Standard Deviation of Bandwidth Between Streams",
        axis_label: "Bandwidth in Mbits/sec",
        value_filter: None,
    },
];

/// Index into [`METRICS`] of the series this line routes to, if any.
///
/// The label decides the series; a series with a value filter then drops
/// rows whose value lacks the filter substring (it does NOT fall through
/// to a later series).
pub fn route(label: &str, value: &str) -> Option<usize> {
    let idx = METRICS.iter().position(|m| label.contains(m.label))?;
    match METRICS[idx].value_filter {
        Some(needle) if !value.contains(needle) => None,
        _ => Some(idx),
    }
}
