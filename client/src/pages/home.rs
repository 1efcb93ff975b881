//! Public landing page.

use leptos::prelude::*;

/// Clinic services highlighted on the landing page, as `(title, blurb)`.
const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Consulta", "Evaluación médica general y seguimiento de tu mascota."),
    ("Vacunación", "Calendario de vacunas al día para perros y gatos."),
    ("Baño y corte", "Higiene y estética con productos especializados."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <h1 class="home-hero__title">"LUAS PETS"</h1>
            <p class="home-hero__subtitle">"Clínica Veterinaria Especializada"</p>
        </section>
        <section class="home-highlights">
            {HIGHLIGHTS
                .into_iter()
                .map(|(title, blurb)| {
                    view! {
                        <article class="home-highlights__card">
                            <h3>{title}</h3>
                            <p>{blurb}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
}
