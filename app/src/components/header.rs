use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the fixed top bar with the brand and page navigation.
pub fn component() -> impl IntoView {
    view! {
        <header class="fixed top-0 right-0 left-0 z-10 py-6 px-4 md:px-6 bg-[#1c1917]/80 backdrop-blur-md">
            <div class="container mx-auto max-w-5xl">
                <nav class="flex flex-row justify-between items-center text-stone-100">
                    <div class="text-lg font-bold tracking-widest uppercase transition-all duration-500 sm:text-3xl hover:text-[#c08a4b]">
                        <A href="/">"Atelier"</A>
                    </div>
                    <div class="flex flex-row gap-4 text-sm font-semibold sm:text-lg">
                        <div class="transition-all duration-500 hover:text-[#c08a4b]">
                            <A href="/custom-furniture">"custom furniture"</A>
                        </div>
                        <a href="/custom-furniture#inquiry" class="transition-all duration-500 hover:text-[#c08a4b]">
                            "inquire"
                        </a>
                    </div>
                </nav>
            </div>
        </header>
    }
}
