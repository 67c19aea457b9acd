use tracing::debug;

use super::config::SiteConfig;
use super::library::{LocalizedVariants, SectionKind, SectionLibrary};
use super::page::{content_hash, truncate_description, GeneratedPage, NearbyLink, META_DESCRIPTION_MAX_CHARS};
use super::SiteError;
use crate::content::{render_template, ContentBlock, LocaleMessages, TemplateContext};
use crate::geo::{CityPath, GeoCatalog};
use crate::routing::{breadcrumbs, BreadcrumbContext, Route};
use crate::types::{Locale, PageKey, ServiceCategory, Slug};
use crate::variation::{SeedHasher, Sha256SeedHasher, VariationSelector};

/// Assembles city x category pages from read-only site tables.
///
/// Holds no mutable state; a single builder can serve any number of
/// concurrent callers.
pub struct SiteBuilder<'a, H = Sha256SeedHasher> {
    config: &'a SiteConfig,
    catalog: &'a GeoCatalog,
    categories: &'a [ServiceCategory],
    library: &'a SectionLibrary,
    messages: &'a LocaleMessages,
    selector: VariationSelector<H>,
}

impl<'a> SiteBuilder<'a, Sha256SeedHasher> {
    pub fn new(
        config: &'a SiteConfig,
        catalog: &'a GeoCatalog,
        categories: &'a [ServiceCategory],
        library: &'a SectionLibrary,
        messages: &'a LocaleMessages,
    ) -> Result<Self, SiteError> {
        library.validate(&config.default_locale)?;
        Ok(Self {
            config,
            catalog,
            categories,
            library,
            messages,
            selector: VariationSelector::default(),
        })
    }
}

impl<'a, H> SiteBuilder<'a, H>
where
    H: SeedHasher,
{
    pub fn with_selector<H2: SeedHasher>(self, selector: VariationSelector<H2>) -> SiteBuilder<'a, H2> {
        SiteBuilder {
            config: self.config,
            catalog: self.catalog,
            categories: self.categories,
            library: self.library,
            messages: self.messages,
            selector,
        }
    }

    fn category(&self, slug: &Slug) -> Result<&'a ServiceCategory, SiteError> {
        self.categories
            .iter()
            .find(|c| &c.slug == slug)
            .ok_or_else(|| SiteError::UnknownCategory(slug.clone()))
    }

    fn pick(
        &self,
        slot: &str,
        variants: &LocalizedVariants,
        key: &PageKey,
        locale: &Locale,
        ctx: &TemplateContext,
    ) -> Result<String, SiteError> {
        let set = variants
            .for_locale(locale, &self.config.default_locale)
            .ok_or_else(|| SiteError::MissingLocaleVariants {
                section: slot.to_string(),
                locale: locale.clone(),
            })?;
        let template = self.selector.select(&key.for_section(slot), set);
        Ok(render_template(template, ctx)?)
    }

    pub fn build_page(
        &self,
        city: &CityPath,
        category: &Slug,
        locale: &Locale,
    ) -> Result<GeneratedPage, SiteError> {
        if !self.config.locales.contains(locale) {
            return Err(SiteError::UnsupportedLocale(locale.clone()));
        }
        let place = self.catalog.city(city)?;
        let service = self.category(category)?;

        let ctx = TemplateContext {
            city: place.city.name.clone(),
            state: place.state.name.clone(),
            state_code: place.state.code.clone(),
            country: place.country.name.clone(),
            category: service.name.clone(),
        };
        let key = PageKey::new(city.to_string(), category.as_str(), locale.as_str());

        let title = self.pick("title", &self.library.title, &key, locale, &ctx)?;
        let description = self.pick("meta_description", &self.library.meta_description, &key, locale, &ctx)?;
        let meta_description = truncate_description(&description, META_DESCRIPTION_MAX_CHARS);

        let mut blocks = Vec::with_capacity(self.library.sections.len() + 1);
        blocks.push(ContentBlock::Heading {
            level: 1,
            text: title.clone(),
        });
        for section in &self.library.sections {
            let text = self.pick(&section.name, &section.variants, &key, locale, &ctx)?;
            blocks.push(match section.kind {
                SectionKind::Heading => ContentBlock::Heading { level: 2, text },
                SectionKind::Paragraph => ContentBlock::Paragraph { text },
            });
        }

        let route = Route::city_category(city.clone(), category.clone());
        let default_locale = &self.config.default_locale;
        let path = route.path(locale, default_locale);
        let url = route.absolute_url(&self.config.base_url, locale, default_locale)?;

        let crumb_ctx = BreadcrumbContext {
            catalog: self.catalog,
            categories: self.categories,
            messages: self.messages,
            default_locale,
        };
        let trail = breadcrumbs(&route, &crumb_ctx, locale)?;

        let nearby: Vec<NearbyLink> = self
            .catalog
            .nearby_cities(city, self.config.nearby_limit)?
            .into_iter()
            .map(|n| NearbyLink {
                label: n.name,
                path: Route::city_category(n.path, category.clone()).path(locale, default_locale),
            })
            .collect();

        let hash = content_hash(&title, &meta_description, &blocks, &trail, &nearby)?;
        debug!(path = %path, content_hash = %hash, "page built");

        Ok(GeneratedPage {
            route,
            locale: locale.clone(),
            path,
            url: url.to_string(),
            title,
            meta_description,
            blocks,
            breadcrumbs: trail,
            nearby,
            content_hash: hash,
        })
    }

    /// Every city x category x locale page, sorted by path.
    pub fn build_all(&self) -> Result<Vec<GeneratedPage>, SiteError> {
        let mut pages = Vec::new();
        for locale in &self.config.locales {
            for place in self.catalog.cities() {
                let city = place.path();
                for category in self.categories {
                    pages.push(self.build_page(&city, &category.slug, locale)?);
                }
            }
        }

        pages.sort_by(|a, b| a.path.cmp(&b.path));
        for pair in pages.windows(2) {
            if pair[0].path == pair[1].path {
                return Err(SiteError::DuplicatePath(pair[0].path.clone()));
            }
        }

        debug!(
            pages = pages.len(),
            locales = self.config.locales.len(),
            categories = self.categories.len(),
            "site built"
        );
        Ok(pages)
    }
}
