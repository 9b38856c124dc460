//! Skeleton templates that ship with bundlegen.
//!
//! Templates are keyed by id (`bundle/Bundle.php`, `js/pimcore/startup.js`,
//! ...) and use `{{VARIABLE}}` placeholders filled from a `RenderContext`.
//! Any of them can be replaced by a file at `<skeleton dir>/<id>`; see
//! [`crate::renderer::SimpleRenderer`].

/// Environment variable naming an extra skeleton override directory.
pub const SKELETON_DIR_ENV: &str = "BUNDLEGEN_SKELETON_DIR";

/// Look up a built-in template by id.
pub fn get(id: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(template_id, _)| *template_id == id)
        .map(|(_, content)| *content)
}

/// Ids of every built-in template.
pub fn ids() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(id, _)| *id)
}

const TEMPLATES: &[(&str, &str)] = &[
    ("bundle/Bundle.php", BUNDLE),
    ("bundle/Extension.php", EXTENSION),
    ("bundle/Configuration.php", CONFIGURATION),
    ("bundle/DefaultController.php", CONTROLLER),
    ("bundle/DefaultController.annotation.php", CONTROLLER_ANNOTATION),
    ("bundle/DefaultControllerTest.php", CONTROLLER_TEST),
    ("bundle/services.yaml", SERVICES_YAML),
    ("bundle/services.xml", SERVICES_XML),
    ("bundle/services.php", SERVICES_PHP),
    ("bundle/routing.yaml", ROUTING_YAML),
    ("bundle/routing.xml", ROUTING_XML),
    ("bundle/routing.php", ROUTING_PHP),
    ("js/pimcore/startup.js", STARTUP_JS),
];

const BUNDLE: &str = r#"<?php

namespace {{NAMESPACE}};

use Symfony\Component\HttpKernel\Bundle\Bundle;

class {{BUNDLE}} extends Bundle
{
    public function getPath(): string
    {
        return \dirname(__DIR__);
    }
}
"#;

const EXTENSION: &str = r#"<?php

namespace {{NAMESPACE}}\DependencyInjection;

use Symfony\Component\Config\FileLocator;
use Symfony\Component\DependencyInjection\ContainerBuilder;
use Symfony\Component\DependencyInjection\Loader;
use Symfony\Component\HttpKernel\DependencyInjection\Extension;

/**
 * Loads and manages the {{BUNDLE}} configuration.
 */
class {{BUNDLE_BASENAME}}Extension extends Extension
{
    public function load(array $configs, ContainerBuilder $container): void
    {
        $configuration = new Configuration();
        $config = $this->processConfiguration($configuration, $configs);

        $loader = new Loader\YamlFileLoader($container, new FileLocator(__DIR__.'/../../config'));
        $loader->load('services.yaml');
    }

    public function getAlias(): string
    {
        return '{{EXTENSION_ALIAS}}';
    }
}
"#;

const CONFIGURATION: &str = r#"<?php

namespace {{NAMESPACE}}\DependencyInjection;

use Symfony\Component\Config\Definition\Builder\TreeBuilder;
use Symfony\Component\Config\Definition\ConfigurationInterface;

/**
 * Validates and merges the {{EXTENSION_ALIAS}} configuration.
 */
class Configuration implements ConfigurationInterface
{
    public function getConfigTreeBuilder(): TreeBuilder
    {
        $treeBuilder = new TreeBuilder('{{EXTENSION_ALIAS}}');

        // Define the bundle's configuration tree here.

        return $treeBuilder;
    }
}
"#;

const CONTROLLER: &str = r#"<?php

namespace {{NAMESPACE}}\Controller;

use Symfony\Bundle\FrameworkBundle\Controller\AbstractController;
use Symfony\Component\HttpFoundation\Response;

class DefaultController extends AbstractController
{
    public function indexAction(): Response
    {
        return new Response('Hello world from {{EXTENSION_ALIAS}}');
    }
}
"#;

const CONTROLLER_ANNOTATION: &str = r#"<?php

namespace {{NAMESPACE}}\Controller;

use Symfony\Bundle\FrameworkBundle\Controller\AbstractController;
use Symfony\Component\HttpFoundation\Response;
use Symfony\Component\Routing\Annotation\Route;

class DefaultController extends AbstractController
{
    /**
     * @Route("/{{EXTENSION_ALIAS}}")
     */
    public function indexAction(): Response
    {
        return new Response('Hello world from {{EXTENSION_ALIAS}}');
    }
}
"#;

const CONTROLLER_TEST: &str = r#"<?php

namespace {{NAMESPACE}}\Tests\Controller;

use Symfony\Bundle\FrameworkBundle\Test\WebTestCase;

class DefaultControllerTest extends WebTestCase
{
    public function testIndex(): void
    {
        $client = static::createClient();

        $client->request('GET', '/{{EXTENSION_ALIAS}}');

        $this->assertStringContainsString('Hello world', (string) $client->getResponse()->getContent());
    }
}
"#;

const SERVICES_YAML: &str = r#"services:
    _defaults:
        autowire: true
        autoconfigure: true
        public: false

    # Controllers are imported separately to make sure they're public
    # and have a tag that allows actions to type-hint services.
    {{NAMESPACE}}\Controller\:
        resource: '../src/Controller'
        public: true
        tags: ['controller.service_arguments']
"#;

const SERVICES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>

<container xmlns="http://symfony.com/schema/dic/services"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://symfony.com/schema/dic/services https://symfony.com/schema/dic/services/services-1.0.xsd">

    <services>
        <defaults autowire="true" autoconfigure="true" public="false" />

        <prototype namespace="{{NAMESPACE}}\Controller\" resource="../src/Controller" public="true">
            <tag name="controller.service_arguments" />
        </prototype>
    </services>
</container>
"#;

const SERVICES_PHP: &str = r#"<?php

namespace Symfony\Component\DependencyInjection\Loader\Configurator;

return function (ContainerConfigurator $configurator) {
    $services = $configurator->services()
        ->defaults()
            ->autowire()
            ->autoconfigure()
            ->private();

    $services->load('{{NAMESPACE}}\\Controller\\', '../src/Controller')
        ->public()
        ->tag('controller.service_arguments');
};
"#;

const ROUTING_YAML: &str = r#"{{EXTENSION_ALIAS}}_homepage:
    path:     /{{EXTENSION_ALIAS}}
    defaults: { _controller: {{NAMESPACE}}\Controller\DefaultController::indexAction }
"#;

const ROUTING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>

<routes xmlns="http://symfony.com/schema/routing"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://symfony.com/schema/routing https://symfony.com/schema/routing/routing-1.0.xsd">

    <route id="{{EXTENSION_ALIAS}}_homepage" path="/{{EXTENSION_ALIAS}}">
        <default key="_controller">{{NAMESPACE}}\Controller\DefaultController::indexAction</default>
    </route>
</routes>
"#;

const ROUTING_PHP: &str = r#"<?php

use Symfony\Component\Routing\Loader\Configurator\RoutingConfigurator;

return function (RoutingConfigurator $routes) {
    $routes->add('{{EXTENSION_ALIAS}}_homepage', '/{{EXTENSION_ALIAS}}')
        ->controller('{{NAMESPACE}}\\Controller\\DefaultController::indexAction');
};
"#;

const STARTUP_JS: &str = r#"pimcore.registerNS("pimcore.plugin.{{BUNDLE}}");

pimcore.plugin.{{BUNDLE}} = Class.create({

    initialize: function () {
        document.addEventListener(pimcore.events.pimcoreReady, this.pimcoreReady.bind(this));
    },

    pimcoreReady: function (e) {
        // alert("{{BUNDLE}} ready!");
    }
});

var {{BUNDLE}}Plugin = new pimcore.plugin.{{BUNDLE}}();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_generator_template_exists() {
        for id in [
            "bundle/Bundle.php",
            "bundle/Extension.php",
            "bundle/Configuration.php",
            "bundle/DefaultController.php",
            "bundle/DefaultController.annotation.php",
            "bundle/DefaultControllerTest.php",
            "bundle/services.yaml",
            "bundle/services.xml",
            "bundle/services.php",
            "bundle/routing.yaml",
            "bundle/routing.xml",
            "bundle/routing.php",
            "js/pimcore/startup.js",
        ] {
            assert!(get(id).is_some(), "missing template {id}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut all: Vec<_> = ids().collect();
        let count = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(get("bundle/routing.ini").is_none());
    }
}
