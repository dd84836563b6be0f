use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
	view! {
		<header class="site-header">
			<a href="#" class="site-name">"Hyunji Cho"</a>
			<nav class="site-nav">
				<a href="#projects">"Projects"</a>
				<a href="https://www.linkedin.com/in/hyunjic/" target="_blank" rel="noreferrer" aria-label="LinkedIn profile">
					"LinkedIn"
				</a>
				<a href="https://github.com/HCHODUBLIN" target="_blank" rel="noreferrer" aria-label="GitHub profile">
					"GitHub"
				</a>
				<a href="mailto:hyunji.cho.uk@gmail.com" aria-label="Email">"Email"</a>
			</nav>
		</header>
	}
}

#[component]
pub fn BioPanel() -> impl IntoView {
	view! {
		<section class="bio-panel">
			<h1 class="bio-name">"Hyunji Cho"</h1>
			<p class="bio-role">"Sustainability Data & Analytics Specialist"</p>
			<p class="bio-text">
				"I build data-driven sustainability systems that integrate impact measurement, AI/ML workflows and governance insights."
			</p>
		</section>
	}
}
