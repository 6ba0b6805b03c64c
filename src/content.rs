//! Content configuration for the page sections.
//!
//! Every section renders from these types. The built-in defaults carry the
//! standard copy; a host page can override any subset through the optional
//! `site-content` JSON island (see [`crate::App`]).

use serde::Deserialize;

/// Use-case category driving the filter tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	/// Applied AI: assistants, triage, extraction.
	Ai,
	/// Workflow automation between tools.
	Auto,
	/// Data consolidation and reporting.
	Data,
}

impl Category {
	/// Tab display order; auto-advance follows this round-robin.
	pub const ORDER: [Category; 3] = [Category::Ai, Category::Auto, Category::Data];

	/// Next category in display order, wrapping at the end.
	pub fn next(self) -> Category {
		let idx = Self::ORDER.iter().position(|c| *c == self).unwrap_or(0);
		Self::ORDER[(idx + 1) % Self::ORDER.len()]
	}

	/// Tab label.
	pub fn label(self) -> &'static str {
		match self {
			Category::Ai => "AI",
			Category::Auto => "Automation",
			Category::Data => "Data",
		}
	}
}

/// A value-proposition card in the "why" section.
#[derive(Clone, Debug, Deserialize)]
pub struct Benefit {
	/// Card heading.
	pub title: String,
	/// Supporting sentence.
	pub detail: String,
}

/// One card in the filterable use-case grid.
#[derive(Clone, Debug, Deserialize)]
pub struct UseCase {
	/// Card heading.
	pub title: String,
	/// Supporting copy.
	pub detail: String,
	/// Filter tab this card belongs to.
	pub category: Category,
}

/// A third-party tool shown in the integrations band.
#[derive(Clone, Debug, Deserialize)]
pub struct Integration {
	/// Display name, also the image alt text.
	pub name: String,
	/// Logo asset path; the image hides itself on load failure.
	pub logo: String,
}

/// Front/back pairing for one rolling carousel slot.
#[derive(Clone, Debug, Deserialize)]
pub struct IconPair {
	/// Tool shown at rest.
	pub front: Integration,
	/// Tool revealed mid-roll.
	pub back: Integration,
}

/// Measured outcome row on a case-study card.
#[derive(Clone, Debug, Deserialize)]
pub struct Kpi {
	/// What was measured.
	pub label: String,
	/// Formatted result ("+38%", "8 h").
	pub value: String,
}

/// One customer story with its KPI card.
#[derive(Clone, Debug, Deserialize)]
pub struct CaseStudy {
	/// Stable id, used to derive unique SVG pattern ids.
	pub id: String,
	/// Narrative paragraph.
	pub story: String,
	/// Avatar asset path; hides itself on load failure.
	pub avatar: String,
	/// Person quoted.
	pub person: String,
	/// Their role and company.
	pub role: String,
	/// Outcome rows, top to bottom.
	pub kpis: Vec<Kpi>,
}

/// A numbered step in the engagement process.
#[derive(Clone, Debug, Deserialize)]
pub struct ProcessStep {
	/// Step number, rendered zero-padded.
	pub number: u8,
	/// Step heading.
	pub title: String,
	/// Supporting copy.
	pub detail: String,
}

/// Everything the page renders from. Each field falls back to its
/// built-in default when missing from the configuration JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteContent {
	/// Words the hero headline cycles through.
	#[serde(default = "default_typewriter_words")]
	pub typewriter_words: Vec<String>,
	/// Cards in the "why" section.
	#[serde(default = "default_benefits")]
	pub benefits: Vec<Benefit>,
	/// Cards in the use-case grid, across all categories.
	#[serde(default = "default_use_cases")]
	pub use_cases: Vec<UseCase>,
	/// Carousel slots in the integrations band.
	#[serde(default = "default_icon_pairs")]
	pub icon_pairs: Vec<IconPair>,
	/// Customer stories.
	#[serde(default = "default_case_studies")]
	pub case_studies: Vec<CaseStudy>,
	/// Engagement steps.
	#[serde(default = "default_process_steps")]
	pub process_steps: Vec<ProcessStep>,
	/// Embedded walkthrough video URL.
	#[serde(default = "default_embed_url")]
	pub embed_url: String,
	/// Advertised integration count.
	#[serde(default = "default_tool_count")]
	pub tool_count: u32,
	/// Anchor every contact call-to-action points at.
	#[serde(default = "default_contact_anchor")]
	pub contact_anchor: String,
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			typewriter_words: default_typewriter_words(),
			benefits: default_benefits(),
			use_cases: default_use_cases(),
			icon_pairs: default_icon_pairs(),
			case_studies: default_case_studies(),
			process_steps: default_process_steps(),
			embed_url: default_embed_url(),
			tool_count: default_tool_count(),
			contact_anchor: default_contact_anchor(),
		}
	}
}

fn default_typewriter_words() -> Vec<String> {
	["Intelligent.", "Automatic.", "Predictive.", "Scalable.", "Efficient."]
		.map(String::from)
		.to_vec()
}

fn default_benefits() -> Vec<Benefit> {
	let raw = [
		(
			"Save hours every week",
			"Repetitive work runs on its own so the busywork stops landing on people.",
		),
		(
			"Raise throughput",
			"Standardized processes let the same team ship noticeably more.",
		),
		(
			"Cut manual errors",
			"Less copy-paste means fewer mistakes and consistent data everywhere.",
		),
		(
			"Free up your team",
			"Bots take the mechanical steps; people keep the judgment calls.",
		),
		(
			"Improve response times",
			"Instant replies and automatic follow-ups, around the clock.",
		),
		(
			"Scale with AI",
			"Flows that classify, summarize, and decide keep up as volume grows.",
		),
	];
	raw.map(|(title, detail)| Benefit {
		title: title.to_string(),
		detail: detail.to_string(),
	})
	.to_vec()
}

fn default_use_cases() -> Vec<UseCase> {
	let raw = [
		(
			Category::Ai,
			"Intent-aware chat assistants",
			"Assistants on WhatsApp, Instagram, or the web that understand intent and tone, then answer, qualify, and route conversations.",
		),
		(
			Category::Ai,
			"Automatic message triage",
			"AI reads urgency, language, and topic, then sends each request to the right queue for faster, better service.",
		),
		(
			Category::Ai,
			"Meeting notes and summaries",
			"Call summaries for Zoom, Meet, or Teams with the decisions, owners, and open items pulled out for the team.",
		),
		(
			Category::Ai,
			"Lead scoring on conversations",
			"Chats, email, and forms scanned for buying signals so the leads most likely to convert surface first.",
		),
		(
			Category::Auto,
			"CRM synchronization",
			"Customer, deal, and form data lands in your CRM on its own, always current, with no manual entry.",
		),
		(
			Category::Auto,
			"Sales follow-up sequences",
			"From first touch to close: reminders, tasks, and follow-ups fire automatically and keep deals moving.",
		),
		(
			Category::Auto,
			"Scheduled reporting",
			"Daily or weekly KPIs delivered to sheets or dashboards without anyone compiling them.",
		),
		(
			Category::Auto,
			"Cross-platform sync",
			"CRM, spreadsheets, inboxes, and marketing tools stay aligned in real time without duplicates.",
		),
		(
			Category::Data,
			"A single source of truth",
			"Company data consolidated in one place so every team reads the same, current numbers.",
		),
		(
			Category::Data,
			"Live dashboards",
			"Sales, activity, and performance indicators always visible for fast decisions.",
		),
		(
			Category::Data,
			"Unified data sources",
			"CRM, sheets, forms, and external systems merged and cleaned for dependable analysis.",
		),
		(
			Category::Data,
			"Targeted automatic reports",
			"Each area receives the metrics it needs on schedule, with no manual spreadsheets.",
		),
	];
	raw.map(|(category, title, detail)| UseCase {
		title: title.to_string(),
		detail: detail.to_string(),
		category,
	})
	.to_vec()
}

fn default_icon_pairs() -> Vec<IconPair> {
	let raw = [
		("Notion", "Slack"),
		("Instagram", "Discord"),
		("Excel", "Airtable"),
		("ChatGPT", "Asana"),
		("Gmail", "Facebook"),
		("Drive", "Dropbox"),
		("Calendar", "Outlook"),
		("WhatsApp", "Telegram"),
	];
	raw.map(|(front, back)| IconPair {
		front: Integration {
			name: front.to_string(),
			logo: format!("/assets/logos/{}.svg", front.to_lowercase()),
		},
		back: Integration {
			name: back.to_string(),
			logo: format!("/assets/logos/{}.svg", back.to_lowercase()),
		},
	})
	.to_vec()
}

fn default_case_studies() -> Vec<CaseStudy> {
	vec![
		CaseStudy {
			id: "gym".to_string(),
			story: "A boutique gym wanted more leads from a seasonal campaign. We shipped a \
				personalized routine generator behind a signup form, a gamified follow-up flow, \
				and a landing page that captured and qualified every contact automatically."
				.to_string(),
			avatar: "/assets/people/marcus.jpg".to_string(),
			person: "Marcus Webb".to_string(),
			role: "Owner, Ironworks Gym".to_string(),
			kpis: vec![
				Kpi { label: "Qualified leads".to_string(), value: "+38%".to_string() },
				Kpi { label: "Member retention".to_string(), value: "+24%".to_string() },
				Kpi { label: "Response time".to_string(), value: "-61%".to_string() },
				Kpi { label: "Inquiries handled automatically".to_string(), value: "82%".to_string() },
			],
		},
		CaseStudy {
			id: "estate".to_string(),
			story: "A real-estate agency was losing inquiries to slow follow-up. We rolled out \
				intent classification, agent routing, and daily digests, every step audited \
				with logs and retries."
				.to_string(),
			avatar: "/assets/people/maria.jpg".to_string(),
			person: "Maria Keller".to_string(),
			role: "CMO, Nova Estates".to_string(),
			kpis: vec![
				Kpi { label: "Meetings booked".to_string(), value: "+29%".to_string() },
				Kpi { label: "Operational errors".to_string(), value: "-70%".to_string() },
				Kpi { label: "Lead-to-visit conversion".to_string(), value: "+31%".to_string() },
				Kpi { label: "Hours saved weekly".to_string(), value: "8 h".to_string() },
			],
		},
	]
}

fn default_process_steps() -> Vec<ProcessStep> {
	let raw = [
		(
			"Free diagnostic",
			"We map your processes and spot the automations with the highest return.",
		),
		(
			"Automation proposal",
			"A concrete plan: flows, tools, timeline, and the metrics we expect to move.",
		),
		(
			"Implementation",
			"We build, test, and ship the flows with your team in the loop.",
		),
		(
			"Support and iteration",
			"Monitoring, tuning, and new automations as your operation grows.",
		),
	];
	raw.iter()
		.enumerate()
		.map(|(i, (title, detail))| ProcessStep {
			number: i as u8 + 1,
			title: (*title).to_string(),
			detail: (*detail).to_string(),
		})
		.collect()
}

fn default_embed_url() -> String {
	"https://www.youtube.com/embed/aircAruvnKk".to_string()
}

fn default_tool_count() -> u32 {
	500
}

fn default_contact_anchor() -> String {
	"#contact".to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_remaining_defaults() {
		let content: SiteContent = serde_json::from_str(r#"{"tool_count": 750}"#).unwrap();
		assert_eq!(content.tool_count, 750);
		assert_eq!(content.benefits.len(), 6);
		assert_eq!(content.use_cases.len(), 12);
		assert_eq!(content.icon_pairs.len(), 8);
		assert_eq!(content.contact_anchor, "#contact");
	}

	#[test]
	fn category_tags_parse_lowercase() {
		let case: UseCase =
			serde_json::from_str(r#"{"title":"t","detail":"d","category":"auto"}"#).unwrap();
		assert_eq!(case.category, Category::Auto);
		assert!(serde_json::from_str::<UseCase>(r#"{"title":"t","detail":"d","category":"Ai"}"#).is_err());
	}

	#[test]
	fn tabs_advance_round_robin() {
		assert_eq!(Category::Ai.next(), Category::Auto);
		assert_eq!(Category::Auto.next(), Category::Data);
		assert_eq!(Category::Data.next(), Category::Ai);
	}

	#[test]
	fn defaults_cover_every_category() {
		let content = SiteContent::default();
		for category in Category::ORDER {
			let count = content
				.use_cases
				.iter()
				.filter(|c| c.category == category)
				.count();
			assert_eq!(count, 4, "{category:?}");
		}
	}

	#[test]
	fn default_steps_are_numbered_from_one() {
		let steps = SiteContent::default().process_steps;
		let numbers: Vec<u8> = steps.iter().map(|s| s.number).collect();
		assert_eq!(numbers, [1, 2, 3, 4]);
	}
}
