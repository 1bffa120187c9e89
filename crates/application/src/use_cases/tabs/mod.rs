pub mod update_all_tabs;
pub mod update_tab;

pub use update_all_tabs::UpdateAllTabsUseCase;
pub use update_tab::UpdateTabUseCase;
