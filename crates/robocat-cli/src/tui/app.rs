use crossterm::event::KeyCode;
use robocat_engine::{
    AggregatedCategory, CatalogStore, SelectionState, aggregate_categories, brand_categories,
    visible_products,
};
use robocat_types::{Brand, Product, ProductId};

/// Which page the browser is on. Detail captures the product id at the
/// moment of selection; the id, not a row index, is what navigation
/// carries, so later refiltering cannot redirect the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail(ProductId),
}

pub struct BrowserApp<'a> {
    store: &'a CatalogStore,
    state: SelectionState,
    /// 0 = all brands, 1..=n = store brand at index-1
    brand_index: usize,
    /// None = no category filter
    category_index: Option<usize>,
    categories: Vec<AggregatedCategory>,
    products: Vec<Product>,
    product_index: usize,
    screen: Screen,
    should_quit: bool,
}

impl<'a> BrowserApp<'a> {
    pub fn new(store: &'a CatalogStore, initial_brand: Option<&Brand>) -> Self {
        let mut app = Self {
            store,
            state: SelectionState::new(),
            brand_index: 0,
            category_index: None,
            categories: Vec::new(),
            products: Vec::new(),
            product_index: 0,
            screen: Screen::List,
            should_quit: false,
        };

        if let Some(brand) = initial_brand
            && let Some(position) = store.brands().iter().position(|b| b.id == brand.id)
        {
            app.brand_index = position + 1;
            app.state.select_brand(Some(brand.id.clone()));
        }

        app.refresh();
        app
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match &self.screen {
            Screen::List => match key {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Left => self.prev_brand(),
                KeyCode::Right | KeyCode::Tab => self.next_brand(),
                KeyCode::Up => self.prev_product(),
                KeyCode::Down => self.next_product(),
                KeyCode::Char('c') => self.next_category(),
                KeyCode::Char('x') => self.clear_category(),
                KeyCode::Enter => self.open_selected(),
                _ => {}
            },
            Screen::Detail(_) => match key {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Backspace => self.screen = Screen::List,
                _ => {}
            },
        }
    }

    pub fn next_brand(&mut self) {
        self.brand_index = (self.brand_index + 1) % (self.store.brands().len() + 1);
        self.brand_changed();
    }

    pub fn prev_brand(&mut self) {
        let tabs = self.store.brands().len() + 1;
        self.brand_index = (self.brand_index + tabs - 1) % tabs;
        self.brand_changed();
    }

    fn brand_changed(&mut self) {
        // Category never survives a brand switch
        self.category_index = None;
        self.state
            .select_brand(self.current_brand().map(|brand| brand.id.clone()));
        self.product_index = 0;
        self.refresh();
    }

    /// Cycle the category filter: none -> first -> ... -> last -> none.
    pub fn next_category(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.category_index = match self.category_index {
            None => Some(0),
            Some(i) if i + 1 < self.categories.len() => Some(i + 1),
            Some(_) => None,
        };
        self.category_changed();
    }

    pub fn clear_category(&mut self) {
        self.category_index = None;
        self.category_changed();
    }

    fn category_changed(&mut self) {
        let key = self
            .category_index
            .and_then(|i| self.categories.get(i))
            .map(|category| category.key.clone());

        match (self.current_brand(), key) {
            (Some(brand), Some(key)) => {
                let category = brand.categories.iter().find(|c| c.key() == key);
                self.state.select_category(category);
            }
            (Some(_), None) => self.state.select_category(None),
            (None, key) => self.state.select_category_key(key),
        }

        self.product_index = 0;
        self.refresh();
    }

    pub fn next_product(&mut self) {
        if self.product_index + 1 < self.products.len() {
            self.product_index += 1;
        }
    }

    pub fn prev_product(&mut self) {
        self.product_index = self.product_index.saturating_sub(1);
    }

    pub fn open_selected(&mut self) {
        if let Some(product) = self.products.get(self.product_index) {
            self.screen = Screen::Detail(product.id.clone());
        }
    }

    fn refresh(&mut self) {
        self.categories = match self.current_brand() {
            Some(brand) => brand_categories(brand),
            None => aggregate_categories(self.store.catalog()),
        };
        self.products = visible_products(self.store, self.state.selection());
        if self.product_index >= self.products.len() {
            self.product_index = self.products.len().saturating_sub(1);
        }
    }

    // ---- accessors for rendering and tests ----

    pub fn store(&self) -> &CatalogStore {
        self.store
    }

    pub fn current_brand(&self) -> Option<&'a Brand> {
        match self.brand_index {
            0 => None,
            n => self.store.brands().get(n - 1),
        }
    }

    pub fn brand_index(&self) -> usize {
        self.brand_index
    }

    pub fn categories(&self) -> &[AggregatedCategory] {
        &self.categories
    }

    pub fn category_index(&self) -> Option<usize> {
        self.category_index
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_index(&self) -> usize {
        self.product_index
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
